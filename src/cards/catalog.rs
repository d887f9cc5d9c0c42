//! Card catalog for template lookup.
//!
//! The `CardCatalog` holds the fixed, ordered list of card templates a
//! match is played with. It provides fast lookup by `TemplateId` and
//! ordered iteration for deterministic starter hands.

use rustc_hash::FxHashMap;

use super::instance::{CardInstance, InstanceIdGen};
use super::template::{AttackRange, CardTemplate, Command, TemplateId};

/// Ordered catalog of card templates.
///
/// Registration order is preserved; starter hands and decks are stamped
/// in catalog order so a fresh match is fully deterministic.
///
/// ## Example
///
/// ```
/// use duelgrid::cards::{CardCatalog, CardTemplate, TemplateId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardTemplate::magic(TemplateId::new(1), "Heal", 2, "Restore 2 hp"));
///
/// let found = catalog.get(TemplateId::new(1)).unwrap();
/// assert_eq!(found.name, "Heal");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    templates: Vec<CardTemplate>,
    by_id: FxHashMap<TemplateId, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in starter catalog.
    ///
    /// A small fixed set used when the match is constructed without
    /// custom hands. Ordered by template id.
    #[must_use]
    pub fn starter() -> Self {
        let mut catalog = Self::new();

        catalog.register(CardTemplate::monster(
            TemplateId::new(1),
            "Manatot",
            4,
            vec![Command::new(0, 2, "Tackle", AttackRange::Melee)],
        ));
        catalog.register(CardTemplate::monster(
            TemplateId::new(2),
            "Slime",
            5,
            vec![
                Command::new(1, 2, "Bash", AttackRange::Melee),
                Command::new(2, 4, "Heavy Bash", AttackRange::Melee),
            ],
        ));
        catalog.register(CardTemplate::magic(
            TemplateId::new(3),
            "Fireball",
            3,
            "Deal 3 damage to the opponent",
        ));
        catalog.register(CardTemplate::monster(
            TemplateId::new(4),
            "Goblin",
            3,
            vec![
                Command::new(1, 1, "Jab", AttackRange::Melee),
                Command::new(3, 3, "Flurry", AttackRange::Melee),
            ],
        ));
        catalog.register(CardTemplate::monster(
            TemplateId::new(5),
            "Sting Archer",
            2,
            vec![Command::new(1, 2, "Longshot", AttackRange::Ranged)],
        ));
        catalog.register(CardTemplate::magic(
            TemplateId::new(6),
            "Heal",
            2,
            "Restore 2 hp",
        ));

        catalog
    }

    /// Register a template.
    ///
    /// Panics if a template with the same ID already exists.
    pub fn register(&mut self, template: CardTemplate) {
        if self.by_id.contains_key(&template.id) {
            panic!("Template with ID {:?} already registered", template.id);
        }
        self.by_id.insert(template.id, self.templates.len());
        self.templates.push(template);
    }

    /// Get a template by ID.
    #[must_use]
    pub fn get(&self, id: TemplateId) -> Option<&CardTemplate> {
        self.by_id.get(&id).map(|&index| &self.templates[index])
    }

    /// Get a template by ID, panicking if not found.
    ///
    /// Use when you're certain the template exists.
    #[must_use]
    pub fn get_unchecked(&self, id: TemplateId) -> &CardTemplate {
        self.get(id).expect("Template not found in catalog")
    }

    /// Check if a template ID is registered.
    #[must_use]
    pub fn contains(&self, id: TemplateId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate over templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.templates.iter()
    }

    /// Stamp one instance of every template, in catalog order.
    #[must_use]
    pub fn stamp_all(&self, ids: &mut InstanceIdGen) -> Vec<CardInstance> {
        self.templates
            .iter()
            .map(|template| CardInstance::stamp(template, ids))
            .collect()
    }
}
