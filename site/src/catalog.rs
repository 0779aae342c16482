//! The feature catalog shown in the grid and the detail overlay.
//!
//! Entries are static and their order is display order. A [`Catalog`] is
//! validated once on construction and never mutated afterwards.

use serde::Serialize;

use crate::error::CatalogError;

/// One product feature: a card in the grid and the overlay body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FeatureEntry {
    /// Display name, unique within a catalog. Also the list identity key.
    pub title: &'static str,
    /// One sentence shown on the card.
    pub short_description: &'static str,
    /// Single glyph used as the card icon.
    pub icon: &'static str,
    /// Longer text, only shown in the overlay.
    pub detail: &'static str,
}

impl FeatureEntry {
    /// URL/id friendly form of the title: lowercase ASCII words joined by `-`.
    ///
    /// ```rust
    /// use petchain_site::catalog::FEATURES;
    ///
    /// assert_eq!(FEATURES[5].slug(), "offline-mode-privacy");
    /// ```
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        for word in self
            .title
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|w| !w.is_empty())
        {
            if !slug.is_empty() {
                slug.push('-');
            }
            slug.push_str(&word.to_ascii_lowercase());
        }
        slug
    }
}

/// PetChain features in display order.
pub const FEATURES: [FeatureEntry; 6] = [
    FeatureEntry {
        title: "Scannable Pet Tags",
        short_description: "Unique QR code tags for each pet, instantly scannable by vets or responders. Displays key info and a custom message.",
        icon: "🐾",
        detail: "Each pet receives a unique QR code tag that links directly to their medical history. Vets and emergency responders can scan the tag to instantly access vital information, including allergies, medications, and a custom message from the owner. The tag can also act as a tracker if your pet goes missing.",
    },
    FeatureEntry {
        title: "Always-Available Records",
        short_description: "Medical history stored on Stellar—tamper-proof, permanent, and accessible anytime.",
        icon: "🔗",
        detail: "All medical records are securely stored on Stellar, ensuring they are tamper-proof and always accessible. No more lost or scattered records—access your pet's health history from anywhere, at any time.",
    },
    FeatureEntry {
        title: "Controlled Access",
        short_description: "Owners control who sees what. Share vaccination status or give full access to a vet.",
        icon: "🔒",
        detail: "You decide who can view your pet's records. Share only vaccination status publicly, or grant full access to a trusted vet. Your pet's privacy and safety are always in your hands.",
    },
    FeatureEntry {
        title: "Smart Notifications",
        short_description: "Automatic alerts for vaccinations and check-ups. Never miss a date.",
        icon: "📅",
        detail: "Receive timely reminders for upcoming vaccinations, check-ups, and treatments. Stay on top of your pet's health schedule with smart, automated notifications.",
    },
    FeatureEntry {
        title: "Vet-Ready Integration",
        short_description: "Easily plugs into existing vet or hospital software.",
        icon: "💻",
        detail: "PetChain is designed to integrate seamlessly with veterinary and hospital management systems, making it easy for professionals to access and update records with minimal friction.",
    },
    FeatureEntry {
        title: "Offline Mode & Privacy",
        short_description: "View essential info offline. Advanced cryptography keeps data secure—even on-chain.",
        icon: "🛡️",
        detail: "Access critical information even without an internet connection. Advanced cryptography, including zero-knowledge proofs, ensures your pet's sensitive data remains private and secure—even on the blockchain.",
    },
];

/// Ordered, validated list of features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<FeatureEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting blank or duplicate titles and slugs.
    ///
    /// Slugs name card ids and prerendered page directories, so they must be
    /// non-empty and distinct too.
    pub fn new(entries: Vec<FeatureEntry>) -> Result<Self, CatalogError> {
        let mut slugs: Vec<String> = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.title.trim().is_empty() {
                return Err(CatalogError::BlankTitle { index });
            }
            if entries[..index].iter().any(|e| e.title == entry.title) {
                return Err(CatalogError::DuplicateTitle {
                    title: entry.title.to_string(),
                });
            }
            let slug = entry.slug();
            if slug.is_empty() {
                return Err(CatalogError::EmptySlug {
                    title: entry.title.to_string(),
                });
            }
            if slugs.contains(&slug) {
                return Err(CatalogError::DuplicateSlug {
                    slug,
                    title: entry.title.to_string(),
                });
            }
            slugs.push(slug);
        }
        Ok(Self { entries })
    }

    /// The six PetChain features.
    pub fn builtin() -> Self {
        Self {
            entries: FEATURES.to_vec(),
        }
    }

    pub fn entries(&self) -> &[FeatureEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FeatureEntry> {
        self.entries.get(index)
    }

    pub fn find(&self, title: &str) -> Option<&FeatureEntry> {
        self.entries.iter().find(|e| e.title == title)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&FeatureEntry> {
        self.entries.iter().find(|e| e.slug() == slug)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &'static str) -> FeatureEntry {
        FeatureEntry {
            title,
            short_description: "short",
            icon: "*",
            detail: "detail",
        }
    }

    #[test]
    fn builtin_keeps_display_order() {
        let catalog = Catalog::builtin();
        let titles: Vec<_> = catalog.entries().iter().map(|e| e.title).collect();
        assert_eq!(
            titles,
            [
                "Scannable Pet Tags",
                "Always-Available Records",
                "Controlled Access",
                "Smart Notifications",
                "Vet-Ready Integration",
                "Offline Mode & Privacy",
            ]
        );
    }

    #[test]
    fn builtin_passes_validation() {
        let validated = Catalog::new(FEATURES.to_vec()).expect("builtin catalog is valid");
        assert_eq!(validated, Catalog::builtin());
    }

    #[test]
    fn rejects_duplicate_titles() {
        let err = Catalog::new(vec![entry("Tags"), entry("Records"), entry("Tags")]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateTitle {
                title: "Tags".into()
            }
        );
    }

    #[test]
    fn rejects_blank_titles() {
        let err = Catalog::new(vec![entry("Tags"), entry("  ")]).unwrap_err();
        assert_eq!(err, CatalogError::BlankTitle { index: 1 });
    }

    #[test]
    fn rejects_titles_sharing_a_slug() {
        let err = Catalog::new(vec![
            entry("Offline Mode & Privacy"),
            entry("Offline Mode Privacy"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateSlug {
                slug: "offline-mode-privacy".into(),
                title: "Offline Mode Privacy".into(),
            }
        );
    }

    #[test]
    fn rejects_titles_without_ascii_alphanumerics() {
        let err = Catalog::new(vec![entry("Überall 🐾"), entry("日本")]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::EmptySlug {
                title: "日本".into()
            }
        );
    }

    #[test]
    fn serializes_entries_with_field_names() {
        let value = serde_json::to_value(FEATURES[0]).unwrap();
        assert_eq!(value["title"], "Scannable Pet Tags");
        assert_eq!(value["icon"], "🐾");
        assert_eq!(value["short_description"], FEATURES[0].short_description);
        assert_eq!(value["detail"], FEATURES[0].detail);
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.get(0), None);
    }

    #[test]
    fn slugs() {
        assert_eq!(FEATURES[0].slug(), "scannable-pet-tags");
        assert_eq!(FEATURES[1].slug(), "always-available-records");
        assert_eq!(FEATURES[4].slug(), "vet-ready-integration");
        assert_eq!(entry("  Odd -- Spacing!! ").slug(), "odd-spacing");
    }

    #[test]
    fn lookups() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.find("Controlled Access"), Some(&FEATURES[2]));
        assert_eq!(catalog.find_by_slug("smart-notifications"), Some(&FEATURES[3]));
        assert_eq!(catalog.find("Nope"), None);
    }
}
