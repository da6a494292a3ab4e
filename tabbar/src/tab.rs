use crate::label::LocalizedLabel;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// Sections of the application reachable from the bottom tab bar.
///
/// Declaration order is the left-to-right display order.
/// `Display` and `FromStr` use the raw key, which doubles as the persisted
/// identifier of a tab. Changing a key breaks stored configs and locale tables.
#[derive(
    Default,
    Copy,
    Clone,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Debug,
)]
pub enum Tab {
    #[default]
    #[strum(to_string = "tabbar_home")]
    Home,

    #[strum(to_string = "tabbar_category")]
    Category,

    #[strum(to_string = "tabbar_transaction")]
    Transaction,

    #[strum(to_string = "tabbar_statistics")]
    Statistics,

    #[strum(to_string = "tabbar_setting")]
    Setting,
}

/// Constant display data attached to a [`Tab`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TabMetadata {
    /// Symbolic name in the platform icon catalog.
    pub icon: &'static str,
    /// Localization lookup key.
    pub key: &'static str,
}

impl Tab {
    /// All tabs in display order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    pub const fn metadata(self) -> TabMetadata {
        match self {
            Tab::Home => TabMetadata {
                icon: "house.fill",
                key: "tabbar_home",
            },
            Tab::Category => TabMetadata {
                icon: "tray.full",
                key: "tabbar_category",
            },
            Tab::Transaction => TabMetadata {
                icon: "plus",
                key: "tabbar_transaction",
            },
            Tab::Statistics => TabMetadata {
                icon: "chart.bar.fill",
                key: "tabbar_statistics",
            },
            Tab::Setting => TabMetadata {
                icon: "gearshape.fill",
                key: "tabbar_setting",
            },
        }
    }

    pub const fn icon(self) -> &'static str {
        self.metadata().icon
    }

    pub const fn localization_key(self) -> &'static str {
        self.metadata().key
    }

    /// Label token. Translation happens only when the token is resolved.
    pub const fn label(self) -> LocalizedLabel {
        LocalizedLabel::new(self.localization_key())
    }

    /// Zero-based index in display order.
    pub const fn position(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;
    use strum::EnumCount;

    #[test]
    fn test_display_order() {
        assert_eq!(
            Tab::all(),
            vec![
                Tab::Home,
                Tab::Category,
                Tab::Transaction,
                Tab::Statistics,
                Tab::Setting,
            ]
        );
        assert_eq!(Tab::COUNT, 5);
    }

    #[test]
    fn test_all_is_idempotent() {
        assert_eq!(Tab::all(), Tab::all());
    }

    #[test]
    fn test_icons() {
        assert_eq!(Tab::Home.icon(), "house.fill");
        assert_eq!(Tab::Category.icon(), "tray.full");
        assert_eq!(Tab::Transaction.icon(), "plus");
        assert_eq!(Tab::Statistics.icon(), "chart.bar.fill");
        assert_eq!(Tab::Setting.icon(), "gearshape.fill");
    }

    #[test]
    fn test_home_key() {
        assert_eq!(Tab::Home.localization_key(), "tabbar_home");
    }

    #[test]
    fn test_every_tab_is_mapped() {
        for tab in Tab::iter() {
            assert!(!tab.icon().is_empty(), "{tab:?} has no icon");
            assert!(!tab.localization_key().is_empty(), "{tab:?} has no key");
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<&str> = Tab::iter().map(Tab::localization_key).collect();
        assert_eq!(keys.len(), Tab::COUNT);
    }

    #[test]
    fn test_icons_are_unique() {
        let icons: HashSet<&str> = Tab::iter().map(Tab::icon).collect();
        assert_eq!(icons.len(), Tab::COUNT);
    }

    #[test]
    fn test_raw_key_round_trip() {
        for tab in Tab::iter() {
            assert_eq!(tab.to_string(), tab.localization_key());
            assert_eq!(Tab::from_str(tab.localization_key()), Ok(tab));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert!(Tab::from_str("tabbar_profile").is_err());
        assert!(Tab::from_str("Home").is_err());
    }

    #[test]
    fn test_position() {
        for (index, tab) in Tab::iter().enumerate() {
            assert_eq!(tab.position(), index);
        }
    }

    #[test]
    fn test_label_carries_key() {
        assert_eq!(Tab::Statistics.label().key(), "tabbar_statistics");
    }

    #[test]
    fn test_default() {
        assert_eq!(Tab::default(), Tab::Home);
    }
}
