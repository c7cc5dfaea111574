/// A lead's email address, validated against the same shape check the
/// landing page applies: `local@domain.tld`, no whitespace, exactly one
/// `@`, and at least one `.` with characters on both sides after the `@`.
#[derive(Clone, Debug)]
pub struct LeadEmail(String);

impl LeadEmail {
    pub fn parse(s: String) -> Option<Self> {
        if is_valid_shape(&s) {
            Some(Self(s))
        } else {
            None
        }
    }
}

fn is_valid_shape(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match s.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

impl AsRef<str> for LeadEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
