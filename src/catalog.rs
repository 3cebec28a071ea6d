use crate::config::GeneratorConfig;
use crate::ids::IdSource;
use std::collections::HashSet;
use tracing::info;
use uuid::Uuid;

/// One logical time series: (channel, subtopic, publisher, metric name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityTuple {
    pub channel: Uuid,
    pub subtopic: String,
    pub publisher: Uuid,
    pub name: String,
}

/// The full, ordered set of entity tuples for one configuration.
#[derive(Debug, Clone, Default)]
pub struct EntityCatalog {
    tuples: Vec<EntityTuple>,
}

impl EntityCatalog {
    /// Build the catalog in channel → subtopic → publisher → metric order.
    ///
    /// Channel ids are drawn once per channel and publisher ids once per
    /// (channel, subtopic, publisher); labels come from 1-based indices.
    pub fn build<I: IdSource + ?Sized>(cfg: &GeneratorConfig, ids: &mut I) -> Self {
        let mut tuples = Vec::with_capacity(cfg.catalog_size() as usize);
        for _ in 0..cfg.channels {
            let channel = ids.next_id();
            for s in 1..=cfg.subtopics {
                let subtopic = format!("subtopic_{}", s);
                for _ in 0..cfg.publishers {
                    let publisher = ids.next_id();
                    for m in 1..=cfg.metrics {
                        tuples.push(EntityTuple {
                            channel,
                            subtopic: subtopic.clone(),
                            publisher,
                            name: format!("metric_{}", m),
                        });
                    }
                }
            }
        }
        info!(
            channels = cfg.channels,
            subtopics = cfg.subtopics,
            publishers = cfg.publishers,
            metrics = cfg.metrics,
            tuples = tuples.len(),
            "entity catalog built"
        );
        Self { tuples }
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntityTuple> {
        self.tuples.iter()
    }

    pub fn tuples(&self) -> &[EntityTuple] {
        &self.tuples
    }

    pub fn distinct_channels(&self) -> usize {
        self.tuples.iter().map(|t| t.channel).collect::<HashSet<_>>().len()
    }

    pub fn distinct_publishers(&self) -> usize {
        self.tuples.iter().map(|t| t.publisher).collect::<HashSet<_>>().len()
    }
}

impl<'a> IntoIterator for &'a EntityCatalog {
    type Item = &'a EntityTuple;
    type IntoIter = std::slice::Iter<'a, EntityTuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
