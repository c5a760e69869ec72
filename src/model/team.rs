use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// An IPL franchise as listed by the upstream team index.
#[derive(Debug, Clone, Serialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

/// Short codes for the eight franchises the upstream API serves.
///
/// `Display` yields the exact wire code (`TeamCode::Rcb` is `"RCB"`). The
/// client accepts plain strings and forwards them unvalidated; this enum is
/// a convenience for callers that want the known set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TeamCode {
    Rcb,
    Kkr,
    Kxp,
    Csk,
    Rr,
    Mi,
    Sh,
    Dc,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn codes_render_as_uppercase_wire_ids() {
        assert_eq!(TeamCode::Rcb.to_string(), "RCB");
        assert_eq!(TeamCode::Mi.to_string(), "MI");
        assert_eq!(TeamCode::Kxp.to_string(), "KXP");
    }

    #[test]
    fn iterates_all_eight_franchises() {
        let codes: Vec<TeamCode> = TeamCode::iter().collect();
        assert_eq!(codes.len(), 8);
        assert!(codes.contains(&TeamCode::Csk));
    }
}
