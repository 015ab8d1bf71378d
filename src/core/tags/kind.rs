//! core/tags/kind.rs
//! Frame classification by id, so reading is a plain `match`.

/// The only frame kinds the player cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Title,
    Artist,
    Picture,
    Other,
}

impl TagKind {
    /// Classify an ID3 frame id. ID3v2.2 three-letter ids map the same way.
    pub fn from_frame_id(id: &str) -> Self {
        match id {
            "TIT2" | "TT2" => TagKind::Title,
            "TPE1" | "TP1" => TagKind::Artist,
            "APIC" | "PIC" => TagKind::Picture,
            _ => TagKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TagKind;

    #[test]
    fn classifies_v23_and_v22_ids() {
        assert_eq!(TagKind::from_frame_id("TIT2"), TagKind::Title);
        assert_eq!(TagKind::from_frame_id("TT2"), TagKind::Title);
        assert_eq!(TagKind::from_frame_id("TPE1"), TagKind::Artist);
        assert_eq!(TagKind::from_frame_id("TP1"), TagKind::Artist);
        assert_eq!(TagKind::from_frame_id("APIC"), TagKind::Picture);
        assert_eq!(TagKind::from_frame_id("PIC"), TagKind::Picture);
    }

    #[test]
    fn everything_else_is_ignored() {
        for id in ["TALB", "TPE2", "COMM", "TXXX", "", "tit2"] {
            assert_eq!(TagKind::from_frame_id(id), TagKind::Other, "{id}");
        }
    }
}
