use crate::banner::{BannerConfig, BannerId};

/// In-memory collection of authored banners.
///
/// Banners keep insertion order so UIs can present them as authored.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BannerCatalog {
    banners: Vec<BannerConfig>,
}

impl BannerCatalog {
    pub fn new(banners: Vec<BannerConfig>) -> Self {
        Self { banners }
    }

    /// Adds a banner, replacing any banner with the same id in place.
    pub fn insert(&mut self, banner: BannerConfig) {
        match self.banners.iter_mut().find(|b| b.id == banner.id) {
            Some(slot) => *slot = banner,
            None => self.banners.push(banner),
        }
    }

    pub fn get(&self, id: &BannerId) -> Option<&BannerConfig> {
        self.banners.iter().find(|banner| &banner.id == id)
    }

    pub fn all(&self) -> &[BannerConfig] {
        &self.banners
    }

    pub fn limited(&self) -> impl Iterator<Item = &BannerConfig> {
        self.banners.iter().filter(|banner| banner.is_limited)
    }

    pub fn permanent(&self) -> impl Iterator<Item = &BannerConfig> {
        self.banners.iter().filter(|banner| !banner.is_limited)
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}

impl FromIterator<BannerConfig> for BannerCatalog {
    fn from_iter<T: IntoIterator<Item = BannerConfig>>(iter: T) -> Self {
        let mut catalog = Self::default();
        for banner in iter {
            catalog.insert(banner);
        }
        catalog
    }
}
