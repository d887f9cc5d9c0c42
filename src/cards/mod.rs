//! Card system: catalog templates and stamped instances.

pub mod catalog;
pub mod instance;
pub mod template;

pub use catalog::CardCatalog;
pub use instance::{CardInstance, InstanceId, InstanceIdGen};
pub use template::{AttackRange, CardKind, CardTemplate, Command, MagicStats, MonsterStats, TemplateId};
