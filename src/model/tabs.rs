/// Navigation destinations of the chart shell. The variant order matches
/// `TABS`, which `descriptor` relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    History,
    Investigations,
    Orders,
    Drugs,
    Ward,
    Surgery,
}

/// Static record naming one navigation destination.
#[derive(Debug, Clone, Copy)]
pub struct TabDescriptor {
    pub tab: Tab,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const TABS: [TabDescriptor; 6] = [
    TabDescriptor {
        tab: Tab::History,
        label: "History",
        icon: "🕘",
    },
    TabDescriptor {
        tab: Tab::Investigations,
        label: "Investigations",
        icon: "🔬",
    },
    TabDescriptor {
        tab: Tab::Orders,
        label: "Orders",
        icon: "📋",
    },
    TabDescriptor {
        tab: Tab::Drugs,
        label: "Drugs",
        icon: "💊",
    },
    TabDescriptor {
        tab: Tab::Ward,
        label: "Ward",
        icon: "🛏",
    },
    TabDescriptor {
        tab: Tab::Surgery,
        label: "Surgery",
        icon: "🩺",
    },
];

impl Tab {
    pub fn descriptor(self) -> &'static TabDescriptor {
        &TABS[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_lookup_matches_variant_order() {
        for descriptor in &TABS {
            assert_eq!(descriptor.tab.descriptor().label, descriptor.label);
        }
    }

    #[test]
    fn labels_are_unique() {
        for (i, a) in TABS.iter().enumerate() {
            for b in &TABS[i + 1..] {
                assert_ne!(a.label, b.label);
            }
        }
    }
}
