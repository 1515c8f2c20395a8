use gloo_console::{error, log};

use crate::{
    class_list::ClassList,
    error::{Error, Result},
    preference::Preference,
    storage::{LocalStorage, PreferenceStore},
};

/// marker class for the dark visual mode, present in the static markup
pub const DARK: &str = "dark-mode";
/// complementary class applied when dark mode is disabled
pub const LIGHT: &str = "bg-light";

/// Apply the stored preference, only a `disabled` preference changes the page
/// since the markup starts out dark. Returns the preference that was read.
pub fn init_dark_mode(store: &impl PreferenceStore, classes: &impl ClassList) -> Result<Preference> {
    let preference = store.load()?;

    if preference.is_disabled() {
        classes.remove(DARK)?;
        classes.add(LIGHT)?;
    }

    Ok(preference)
}

/// Flip both classes and persist the opposite of the stored preference.
/// The classes are flipped independently of what is stored, so the two only
/// agree as long as nothing else edits the class list.
pub fn toggle_dark_mode(store: &impl PreferenceStore, classes: &impl ClassList) -> Result<Preference> {
    classes.toggle(DARK)?;
    classes.toggle(LIGHT)?;

    let preference = store.load()?.toggled();
    store.save(preference)?;

    Ok(preference)
}

fn browser() -> Result<(LocalStorage, web_sys::DomTokenList)> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let body = window
        .document()
        .and_then(|d| d.body())
        .ok_or(Error::NoBody)?;

    Ok((LocalStorage::new(&window)?, body.class_list()))
}

/// run on page load
pub fn init() {
    let result = browser().and_then(|(store, classes)| init_dark_mode(&store, &classes));

    match result {
        Ok(Preference::Disabled) => log!("Dark mode disabled by stored preference"),
        Ok(_) => (),
        Err(e) => error!(format!("Error initializing dark mode: {e}")),
    }
}

/// run on user action
pub fn toggle() {
    let result = browser().and_then(|(store, classes)| toggle_dark_mode(&store, &classes));

    match result {
        Ok(preference) => log!(format!("Dark mode {preference}")),
        Err(e) => error!(format!("Error toggling dark mode: {e}")),
    }
}
