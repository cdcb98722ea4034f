//! Social-link toggle view model.

use crate::models::{SocialMedia, SocialsEnum};

/// One entry of the social toggle list.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub id: SocialsEnum,
    pub connected: bool,
    pub icon: &'static str,
}

/// Derive the fixed display list: one entry per known platform, marked
/// connected when `connected` contains an account on that platform.
pub fn social_links(connected: &[SocialMedia]) -> Vec<SocialLink> {
    SocialsEnum::ALL
        .iter()
        .map(|platform| SocialLink {
            id: *platform,
            connected: connected.iter().any(|c| c.platform == *platform),
            icon: platform.icon(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(platform: SocialsEnum) -> SocialMedia {
        SocialMedia {
            id: format!("{}-1", platform),
            platform,
            username: Some("alice".into()),
            verified: true,
            primary: false,
        }
    }

    #[test]
    fn test_one_entry_per_known_platform() {
        assert_eq!(social_links(&[]).len(), SocialsEnum::ALL.len());

        let many = vec![
            account(SocialsEnum::Twitter),
            account(SocialsEnum::Twitter),
            account(SocialsEnum::Telegram),
        ];
        assert_eq!(social_links(&many).len(), SocialsEnum::ALL.len());
    }

    #[test]
    fn test_connected_flag_matches_membership() {
        let connected = vec![account(SocialsEnum::Reddit), account(SocialsEnum::Instagram)];
        let links = social_links(&connected);

        for link in &links {
            let expected = connected.iter().any(|c| c.platform == link.id);
            assert_eq!(link.connected, expected, "platform {}", link.id);
        }
        assert!(links.iter().any(|l| l.id == SocialsEnum::Reddit && l.connected));
        assert!(links.iter().any(|l| l.id == SocialsEnum::Twitter && !l.connected));
    }

    #[test]
    fn test_display_order_is_fixed() {
        let ids: Vec<_> = social_links(&[account(SocialsEnum::Telegram)])
            .into_iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(ids, SocialsEnum::ALL.to_vec());
    }
}
