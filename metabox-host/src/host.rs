use crate::editor::EditorWidget;
use crate::escape::Escaper;
use crate::filter::DataFilter;
use crate::hooks::{AdminScreen, HookRegistry};
use crate::services::{AttributeStore, Authorizer, ItemUpdater, TransientStore};
use std::sync::Arc;

/// One implementation of every host service a metabox calls into.
#[derive(Clone)]
pub struct Host {
    pub attributes: Arc<dyn AttributeStore>,
    pub transients: Arc<dyn TransientStore>,
    pub escaper: Arc<dyn Escaper>,
    pub filter: Arc<dyn DataFilter>,
    pub authorizer: Arc<dyn Authorizer>,
    pub items: Arc<dyn ItemUpdater>,
    pub editor: Arc<dyn EditorWidget>,
    pub hooks: Arc<dyn HookRegistry>,
    pub screen: Arc<dyn AdminScreen>,
}
