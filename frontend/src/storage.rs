use crate::{
    error::{Error, Result},
    preference::Preference,
};

/// localStorage key holding the preference
pub const MODE_KEY: &str = "mode";

pub trait PreferenceStore {
    fn load(&self) -> Result<Preference>;

    fn save(&self, preference: Preference) -> Result<()>;
}

/// origin scoped browser storage
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn new(window: &web_sys::Window) -> Result<Self> {
        // local_storage() throws when storage is blocked, and yields None when absent
        let storage = window.local_storage()?.ok_or(Error::NoStorage)?;

        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self) -> Result<Preference> {
        let value = self.storage.get_item(MODE_KEY)?;

        Ok(Preference::from_stored(value.as_deref()))
    }

    fn save(&self, preference: Preference) -> Result<()> {
        match preference.as_stored() {
            Some(value) => self.storage.set_item(MODE_KEY, value)?,
            None => self.storage.remove_item(MODE_KEY)?,
        }

        Ok(())
    }
}
