use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

pub const THEME_KEY: &str = "portfolio-theme";
pub const DEFAULT_THEME: Theme = Theme::Light;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable key-value storage the theme preference is persisted to.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), &'static str>;
}

#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), &'static str> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: PreferenceStorage + ?Sized> PreferenceStorage for std::rc::Rc<T> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), &'static str> {
        (**self).write(key, value)
    }
}

pub fn resolve_theme(stored: Option<&str>, system_prefers_dark: Option<bool>) -> Theme {
    if let Some(theme) = stored.and_then(Theme::from_str) {
        return theme;
    }

    match system_prefers_dark {
        Some(true) => Theme::Dark,
        Some(false) => Theme::Light,
        None => DEFAULT_THEME,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(Theme)>;

/// Single-writer owner of the active theme. Consumers observe it through
/// [`ThemeHolder::subscribe`]; every `set` is persisted before subscribers run.
pub struct ThemeHolder {
    current: Theme,
    storage: Option<Box<dyn PreferenceStorage>>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl ThemeHolder {
    pub fn initialize(
        storage: Option<Box<dyn PreferenceStorage>>,
        system_prefers_dark: Option<bool>,
    ) -> Self {
        let stored = storage.as_ref().and_then(|storage| storage.read(THEME_KEY));
        let current = resolve_theme(stored.as_deref(), system_prefers_dark);

        Self {
            current,
            storage,
            subscribers: Vec::new(),
            next_subscription: 1,
        }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    pub fn is_persistent(&self) -> bool {
        self.storage.is_some()
    }

    pub fn set(&mut self, theme: Theme) {
        self.persist(theme);

        if theme == self.current {
            return;
        }

        self.current = theme;
        for (_, subscriber) in &self.subscribers {
            subscriber(theme);
        }
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(existing, _)| *existing != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn persist(&mut self, theme: Theme) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };

        // A failed write leaves the preference in memory for the rest of the session.
        if storage.write(THEME_KEY, theme.as_str()).is_err() {
            self.storage = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FailingStorage {
        writes: Cell<usize>,
    }

    impl PreferenceStorage for FailingStorage {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), &'static str> {
            self.writes.set(self.writes.get() + 1);
            Err("quota exceeded")
        }
    }

    #[test]
    fn resolution_prefers_persisted_then_system_then_default() {
        assert_eq!(resolve_theme(Some("dark"), Some(false)), Theme::Dark);
        assert_eq!(resolve_theme(Some("light"), Some(true)), Theme::Light);
        assert_eq!(resolve_theme(Some("sepia"), Some(true)), Theme::Dark);
        assert_eq!(resolve_theme(None, Some(false)), Theme::Light);
        assert_eq!(resolve_theme(None, None), DEFAULT_THEME);
    }

    #[test]
    fn dark_survives_a_fresh_initialization() {
        let storage = Rc::new(MemoryStorage::new());

        let mut holder = ThemeHolder::initialize(Some(Box::new(storage.clone())), Some(false));
        assert_eq!(holder.get(), Theme::Light);
        holder.set(Theme::Dark);
        assert_eq!(storage.read(THEME_KEY).as_deref(), Some("dark"));

        let reloaded = ThemeHolder::initialize(Some(Box::new(storage)), Some(false));
        assert_eq!(reloaded.get(), Theme::Dark);
    }

    #[test]
    fn subscribers_are_notified_synchronously_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut holder = ThemeHolder::initialize(Some(Box::new(MemoryStorage::new())), None);

        let sink = seen.clone();
        let id = holder.subscribe(move |theme| sink.borrow_mut().push(theme));

        assert_eq!(holder.toggle(), Theme::Dark);
        holder.set(Theme::Dark);
        assert_eq!(*seen.borrow(), vec![Theme::Dark]);

        holder.unsubscribe(id);
        holder.set(Theme::Light);
        assert_eq!(*seen.borrow(), vec![Theme::Dark]);
        assert_eq!(holder.subscriber_count(), 0);
    }

    #[test]
    fn write_failure_falls_back_to_memory() {
        let storage = Rc::new(FailingStorage {
            writes: Cell::new(0),
        });
        let mut holder = ThemeHolder::initialize(Some(Box::new(storage.clone())), Some(true));
        assert_eq!(holder.get(), Theme::Dark);

        holder.set(Theme::Light);
        assert_eq!(holder.get(), Theme::Light);
        assert!(!holder.is_persistent());
        assert_eq!(storage.writes.get(), 1);

        holder.toggle();
        assert_eq!(holder.get(), Theme::Dark);
        assert_eq!(storage.writes.get(), 1, "no write is attempted after the failure");
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
    }
}
