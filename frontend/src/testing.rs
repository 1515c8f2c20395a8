use std::{
    cell::{Cell, RefCell},
    collections::BTreeSet,
};

use crate::{class_list::ClassList, error::Result, preference::Preference, storage::PreferenceStore};

/// in-memory stand-in for localStorage, holds the raw stored string
#[derive(Default)]
pub struct MemoryStore {
    pub value: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn with(value: Option<&str>) -> Self {
        Self {
            value: RefCell::new(value.map(String::from)),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Preference> {
        Ok(Preference::from_stored(self.value.borrow().as_deref()))
    }

    fn save(&self, preference: Preference) -> Result<()> {
        *self.value.borrow_mut() = preference.as_stored().map(String::from);

        Ok(())
    }
}

/// class list that counts mutations
#[derive(Default)]
pub struct MemoryClassList {
    classes: RefCell<BTreeSet<String>>,
    pub mutations: Cell<usize>,
}

impl MemoryClassList {
    pub fn with(classes: &[&str]) -> Self {
        Self {
            classes: RefCell::new(classes.iter().map(|c| c.to_string()).collect()),
            mutations: Cell::new(0),
        }
    }

    pub fn snapshot(&self) -> BTreeSet<String> {
        self.classes.borrow().clone()
    }

    fn touch(&self) {
        self.mutations.set(self.mutations.get() + 1);
    }
}

impl ClassList for MemoryClassList {
    fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn add(&self, class: &str) -> Result<()> {
        self.touch();
        self.classes.borrow_mut().insert(class.to_string());

        Ok(())
    }

    fn remove(&self, class: &str) -> Result<()> {
        self.touch();
        self.classes.borrow_mut().remove(class);

        Ok(())
    }

    fn toggle(&self, class: &str) -> Result<bool> {
        self.touch();
        let mut classes = self.classes.borrow_mut();
        if classes.remove(class) {
            Ok(false)
        } else {
            classes.insert(class.to_string());
            Ok(true)
        }
    }
}
