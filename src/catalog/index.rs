use std::collections::{HashMap, HashSet};

use crate::models::{Lang, Region, Site};

/// A site together with the name of the region that owns it.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    pub site: Site,
    pub region: String,
}

/// Immutable, flattened view of every site in the catalog.
///
/// Built once from the loaded regions. Entries keep source order: regions in
/// the order given, historical sites before recreational ones.
#[derive(Clone, Debug, Default)]
pub struct CatalogIndex {
    entries: Vec<CatalogEntry>,
    region_names: Vec<String>,
    by_name: HashMap<Lang, HashMap<String, Vec<usize>>>,
}

impl CatalogIndex {
    pub fn build(regions: Vec<Region>) -> Self {
        let mut entries = Vec::new();
        let mut region_names = Vec::with_capacity(regions.len());
        let mut seen_regions = HashSet::new();
        let mut by_name: HashMap<Lang, HashMap<String, Vec<usize>>> = HashMap::new();

        for region in regions {
            let Region {
                name,
                historical_sites,
                recreational_sites,
            } = region;
            for site in historical_sites.into_iter().chain(recreational_sites) {
                let idx = entries.len();
                for lang in Lang::ALL {
                    if let Some(site_name) = site.name(lang) {
                        by_name
                            .entry(lang)
                            .or_default()
                            .entry(site_name.to_string())
                            .or_default()
                            .push(idx);
                    }
                }
                entries.push(CatalogEntry {
                    site,
                    region: name.clone(),
                });
            }
            if seen_regions.insert(name.clone()) {
                region_names.push(name);
            }
        }

        tracing::debug!(
            regions = region_names.len(),
            sites = entries.len(),
            "Catalog index built"
        );

        Self {
            entries,
            region_names,
            by_name,
        }
    }

    /// Every site with its owning region, in catalog order.
    pub fn all_sites(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Sites whose `<lang>_Site_Name` equals `name` exactly (case-sensitive).
    pub fn sites_by_name(&self, lang: Lang, name: &str) -> Vec<&CatalogEntry> {
        self.by_name
            .get(&lang)
            .and_then(|names| names.get(name))
            .map(|idxs| idxs.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }

    pub fn region_names(&self) -> &[String] {
        &self.region_names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
