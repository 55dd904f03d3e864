use crate::locale::LocalizedText;
use crate::models::{Layer, Topic};

/// Compiled-in topic and layer table. Built once at startup and shared by
/// reference; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            Topic {
                id: "default",
                name: LocalizedText::new("Amicizia", "Friendship"),
                icon: "❖",
                layers: vec![
                    layer(1, "Rompighiaccio", "Icebreakers", "default_1"),
                    layer(2, "Conoscersi", "Getting to know", "default_2"),
                    layer(3, "In profondità", "Going deeper", "default_3"),
                    layer(4, "Senza filtri", "Unfiltered", "default_4"),
                ],
            },
            Topic {
                id: "love",
                name: LocalizedText::new("Amore", "Love"),
                icon: "♥",
                layers: vec![
                    layer(1, "Scintille", "Sparks", "love_1"),
                    layer(2, "Intimità", "Intimacy", "love_2"),
                    layer(3, "Futuro", "Future", "love_3"),
                ],
            },
            Topic {
                id: "thc",
                name: LocalizedText::new("Fuori di testa", "Mind-bending"),
                icon: "★",
                layers: vec![
                    layer(1, "Leggero", "Light", "thc_1"),
                    layer(2, "Surreale", "Surreal", "thc_2"),
                    layer(3, "Cosmico", "Cosmic", "thc_3"),
                ],
            },
        ])
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic(&self, topic_id: &str) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id == topic_id)
    }

    pub fn layer(&self, topic_id: &str, layer_id: u32) -> Option<(&Topic, &Layer)> {
        let topic = self.topic(topic_id)?;
        topic.layer(layer_id).map(|layer| (topic, layer))
    }
}

fn layer(id: u32, it: &'static str, en: &'static str, resource: &'static str) -> Layer {
    Layer {
        id,
        name: LocalizedText::new(it, en),
        resource,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_topics_in_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.topics().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["default", "love", "thc"]);
    }

    #[test]
    fn test_layer_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.topic("default").unwrap().layers.len(), 4);
        assert_eq!(catalog.topic("love").unwrap().layers.len(), 3);
        assert_eq!(catalog.topic("thc").unwrap().layers.len(), 3);
    }

    #[test]
    fn test_layer_ids_are_one_based_and_sequential() {
        let catalog = Catalog::builtin();
        for topic in catalog.topics() {
            for (i, layer) in topic.layers.iter().enumerate() {
                assert_eq!(layer.id as usize, i + 1, "topic {}", topic.id);
            }
        }
    }

    #[test]
    fn test_every_layer_has_a_unique_resource() {
        let catalog = Catalog::builtin();
        let mut seen = HashSet::new();
        for topic in catalog.topics() {
            for layer in &topic.layers {
                assert!(!layer.resource.is_empty());
                assert_eq!(layer.resource, format!("{}_{}", topic.id, layer.id));
                assert!(seen.insert(layer.resource));
            }
        }
    }

    #[test]
    fn test_lookup_layer() {
        let catalog = Catalog::builtin();
        let (topic, layer) = catalog.layer("love", 2).unwrap();
        assert_eq!(topic.id, "love");
        assert_eq!(layer.resource, "love_2");
    }

    #[test]
    fn test_lookup_unknown_topic_or_layer() {
        let catalog = Catalog::builtin();
        assert!(catalog.topic("nope").is_none());
        assert!(catalog.layer("nope", 1).is_none());
        assert!(catalog.layer("love", 0).is_none());
        assert!(catalog.layer("love", 4).is_none());
    }
}
