mod lead_email;

pub use lead_email::LeadEmail;
