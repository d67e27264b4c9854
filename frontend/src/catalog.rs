//! Sample data mounted by the showcase page, compiled into the binary.

use shared::{CatalogError, SampleCatalog};

const SAMPLES_JSON: &str = include_str!("../data/samples.json");

pub fn load_samples() -> Result<SampleCatalog, CatalogError> {
    let catalog = SampleCatalog::from_json(SAMPLES_JSON)?;
    log::info!(
        "Loaded sample catalog: {} basic, {} animated, {} multi, {} nested items",
        catalog.basic.len(),
        catalog.animated.len(),
        catalog.multi.len(),
        catalog.nested.len()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TransitionConfig;

    #[test]
    fn test_load_samples() {
        let catalog = load_samples().unwrap();
        assert_eq!(catalog.basic.len(), 3);
        assert_eq!(catalog.animated.len(), 3);
        assert_eq!(catalog.multi.len(), 3);
        assert_eq!(catalog.nested.len(), 2);
        assert_eq!(catalog.transition, TransitionConfig::default());
    }

    #[test]
    fn test_nested_samples_have_one_level_of_sub_items() {
        let catalog = load_samples().unwrap();
        let sub_counts: Vec<_> = catalog.nested.iter().map(|i| i.sub_items().len()).collect();
        assert_eq!(sub_counts, vec![2, 1]);
        assert!(catalog
            .nested
            .iter()
            .flat_map(|i| i.sub_items())
            .all(|sub| !sub.has_sub_items()));
        assert_eq!(catalog.nested[0].sub_items()[1].title, "Sub-section 1.2");
    }
}
