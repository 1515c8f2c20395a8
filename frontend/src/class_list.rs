use crate::error::Result;

/// mutable set of css class names on an element
pub trait ClassList {
    fn contains(&self, class: &str) -> bool;

    fn add(&self, class: &str) -> Result<()>;

    fn remove(&self, class: &str) -> Result<()>;

    /// returns whether the class is present afterwards
    fn toggle(&self, class: &str) -> Result<bool>;
}

impl ClassList for web_sys::DomTokenList {
    fn contains(&self, class: &str) -> bool {
        web_sys::DomTokenList::contains(self, class)
    }

    fn add(&self, class: &str) -> Result<()> {
        Ok(self.add_1(class)?)
    }

    fn remove(&self, class: &str) -> Result<()> {
        Ok(self.remove_1(class)?)
    }

    fn toggle(&self, class: &str) -> Result<bool> {
        Ok(web_sys::DomTokenList::toggle(self, class)?)
    }
}
