pub mod convert;
pub mod error;
pub mod plugin;
pub mod registry;
pub mod schema;
pub mod types;
pub mod xml;

pub use convert::convert_mapping_to_xml;
pub use error::{
    PluginError,
    PluginResult,
};
pub use plugin::{
    BranchSourceKind,
    Module,
    ProjectType,
};
pub use registry::ComponentRegistry;
pub use schema::{
    ComponentMetadata,
    FieldSpec,
    OptionTable,
};
pub use types::{
    JobData,
    MappingRef,
};
pub use xml::{
    render,
    RenderOptions,
    XmlElement,
    PARENT_REFERENCE,
};

/// Generates a `register` function adding the listed components to a registry
///
/// ```ignore
/// jobxml_plugin_api::register_components!(
///     project_types: [MultibranchPipeline],
///     modules: [BranchSourcesModule],
/// );
/// ```
#[macro_export]
macro_rules! register_components {
    (
        $(project_types: [$($project:ty),* $(,)?] $(,)?)?
        $(modules: [$($module:ty),* $(,)?] $(,)?)?
        $(branch_sources: [$($source:ty),* $(,)?] $(,)?)?
    ) => {
        pub fn register(registry: &mut $crate::ComponentRegistry) {
            $($(registry.register_project_type(Box::new(<$project>::default()));)*)?
            $($(registry.register_module(Box::new(<$module>::default()));)*)?
            $($(registry.register_branch_source(Box::new(<$source>::default()));)*)?
        }
    };
}
