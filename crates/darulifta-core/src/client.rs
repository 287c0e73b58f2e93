use std::sync::atomic::AtomicU64;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::assist::AssistClient;
use crate::config::AssistConfig;
use crate::error::{IftaError, Result};
use crate::models::{MuftiAccount, UserAccount};
use crate::seed::{seed_fatwas, seed_muftis};
use crate::store::{AccountRegistry, RecordStore};

mod account_service;
mod assist_service;
mod record_service;
mod search_service;

/// Application facade: the record store, the two independent account
/// registries (each with its single session slot), and the AI boundary.
/// Everything lives in process memory; dropping the last clone is the
/// only "shutdown". Cloning shares state.
#[derive(Clone)]
pub struct DarulIfta {
    records: Arc<RwLock<RecordStore>>,
    users: Arc<RwLock<AccountRegistry<UserAccount>>>,
    muftis: Arc<RwLock<AccountRegistry<MuftiAccount>>>,
    assist: AssistClient,
    publish_seq: Arc<AtomicU64>,
}

impl std::fmt::Debug for DarulIfta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DarulIfta").finish_non_exhaustive()
    }
}

impl DarulIfta {
    pub fn new() -> Result<Self> {
        Self::with_config(AssistConfig::from_env())
    }

    pub fn with_config(config: AssistConfig) -> Result<Self> {
        Ok(Self {
            records: Arc::new(RwLock::new(RecordStore::new(seed_fatwas()))),
            users: Arc::new(RwLock::new(AccountRegistry::new(Vec::new()))),
            muftis: Arc::new(RwLock::new(AccountRegistry::new(seed_muftis()))),
            assist: AssistClient::new(config)?,
            publish_seq: Arc::new(AtomicU64::new(0)),
        })
    }

    #[must_use]
    pub fn assist(&self) -> &AssistClient {
        &self.assist
    }

    pub(crate) fn records_read(&self) -> Result<RwLockReadGuard<'_, RecordStore>> {
        self.records
            .read()
            .map_err(|_| IftaError::lock_poisoned("record store"))
    }

    pub(crate) fn records_write(&self) -> Result<RwLockWriteGuard<'_, RecordStore>> {
        self.records
            .write()
            .map_err(|_| IftaError::lock_poisoned("record store"))
    }

    pub(crate) fn users_read(&self) -> Result<RwLockReadGuard<'_, AccountRegistry<UserAccount>>> {
        self.users
            .read()
            .map_err(|_| IftaError::lock_poisoned("user registry"))
    }

    pub(crate) fn users_write(&self) -> Result<RwLockWriteGuard<'_, AccountRegistry<UserAccount>>> {
        self.users
            .write()
            .map_err(|_| IftaError::lock_poisoned("user registry"))
    }

    pub(crate) fn muftis_read(&self) -> Result<RwLockReadGuard<'_, AccountRegistry<MuftiAccount>>> {
        self.muftis
            .read()
            .map_err(|_| IftaError::lock_poisoned("mufti registry"))
    }

    pub(crate) fn muftis_write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, AccountRegistry<MuftiAccount>>> {
        self.muftis
            .write()
            .map_err(|_| IftaError::lock_poisoned("mufti registry"))
    }
}
