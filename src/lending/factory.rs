use std::sync::Arc;
use tokio::sync::Mutex;
use crate::catalog::factory::create_catalog_from;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::lending::domain::{LendingService, SharedLibrary};
use crate::lending::domain::service::LendingServiceImpl;
use crate::snapshot::domain::Snapshot;

pub fn create_shared_library(config: &Configuration, snapshot: &Snapshot) -> LibraryResult<SharedLibrary> {
    let catalog = create_catalog_from(snapshot)?;
    let svc: Box<dyn LendingService> = Box::new(LendingServiceImpl::new(config, catalog));
    Ok(Arc::new(Mutex::new(svc)))
}
