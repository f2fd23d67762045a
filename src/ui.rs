//! View surface. Controllers talk to a [`Page`] by logical element name and
//! never hold element handles of their own.

use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    Operand1,
    Operand2,
    Operator,
    Result,
    Greeting,
    HashLabel,
    LoginMessage,
    HistoryList,
    UserList,
    Container,
    SecondaryContainer,
    ThemeButton,
    LoginField,
    PasswordField,
}

impl Element {
    pub const ALL: [Element; 14] = [
        Element::Operand1,
        Element::Operand2,
        Element::Operator,
        Element::Result,
        Element::Greeting,
        Element::HashLabel,
        Element::LoginMessage,
        Element::HistoryList,
        Element::UserList,
        Element::Container,
        Element::SecondaryContainer,
        Element::ThemeButton,
        Element::LoginField,
        Element::PasswordField,
    ];

    /// Element id on the original HTML pages.
    pub fn dom_id(self) -> &'static str {
        match self {
            Element::Operand1 => "1",
            Element::Operand2 => "2",
            Element::Operator => "operations",
            Element::Result => "res",
            Element::Greeting => "name",
            Element::HashLabel => "hash",
            Element::LoginMessage => "message",
            Element::HistoryList => "history",
            Element::UserList => "users",
            Element::Container => "container",
            Element::SecondaryContainer => "container2",
            Element::ThemeButton => "theme-button",
            Element::LoginField => "login",
            Element::PasswordField => "password",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// One row of a rendered list. `control` is the id an embedded action targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub text: String,
    pub control: Option<String>,
}

impl ListItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            control: None,
        }
    }

    pub fn with_control(text: impl Into<String>, control: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            control: Some(control.into()),
        }
    }
}

pub trait Page {
    fn has(&self, element: Element) -> bool;
    fn value(&self, element: Element) -> Option<String>;
    fn set_value(&mut self, element: Element, value: &str);
    fn set_text(&mut self, element: Element, text: &str);
    /// Clears the container and repopulates it in the given order.
    fn set_items(&mut self, element: Element, items: Vec<ListItem>);
    fn set_class(&mut self, element: Element, class: &str);
    fn alert(&mut self, message: &str);
    fn navigate(&mut self, route: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Text(Element, String),
    Items(Element, Vec<ListItem>),
    Class(Element, String),
    Alert(String),
    Navigate(String),
}

impl fmt::Display for PageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageEvent::Text(element, text) => write!(f, "[{element}] {text}"),
            PageEvent::Items(element, items) => {
                write!(f, "[{element}] {} item(s)", items.len())?;
                for item in items {
                    match &item.control {
                        Some(control) => write!(f, "\n  - {} (delete {control})", item.text)?,
                        None => write!(f, "\n  - {}", item.text)?,
                    }
                }
                Ok(())
            }
            PageEvent::Class(element, class) => write!(f, "[{element}] class=\"{class}\""),
            PageEvent::Alert(message) => write!(f, "! {message}"),
            PageEvent::Navigate(route) => write!(f, "-> {route}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub value: String,
    pub text: Option<String>,
    pub items: Vec<ListItem>,
    pub class: String,
}

/// A page held in memory. Mutations update the node tree and are also
/// recorded as [`PageEvent`]s until drained.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    nodes: BTreeMap<Element, Node>,
    events: Vec<PageEvent>,
}

impl MemoryPage {
    pub fn new(elements: &[Element]) -> Self {
        Self {
            nodes: elements.iter().map(|element| (*element, Node::default())).collect(),
            events: Vec::new(),
        }
    }

    /// Every element at once; the console renders all regions on one screen.
    pub fn full() -> Self {
        Self::new(&Element::ALL)
    }

    pub fn calculator() -> Self {
        Self::new(&[
            Element::Operand1,
            Element::Operand2,
            Element::Operator,
            Element::Result,
            Element::Greeting,
            Element::HashLabel,
            Element::HistoryList,
            Element::Container,
            Element::SecondaryContainer,
            Element::ThemeButton,
        ])
    }

    pub fn login() -> Self {
        Self::new(&[
            Element::LoginField,
            Element::PasswordField,
            Element::LoginMessage,
            Element::Container,
            Element::ThemeButton,
        ])
    }

    pub fn node(&self, element: Element) -> Option<&Node> {
        self.nodes.get(&element)
    }

    pub fn text(&self, element: Element) -> Option<&str> {
        self.node(element).and_then(|node| node.text.as_deref())
    }

    pub fn items(&self, element: Element) -> &[ListItem] {
        self.node(element).map(|node| node.items.as_slice()).unwrap_or_default()
    }

    pub fn class(&self, element: Element) -> Option<&str> {
        self.node(element).map(|node| node.class.as_str())
    }

    pub fn events(&self) -> &[PageEvent] {
        &self.events
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PageEvent::Alert(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PageEvent::Navigate(route) => Some(route.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn drain_events(&mut self) -> Vec<PageEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Page for MemoryPage {
    fn has(&self, element: Element) -> bool {
        self.nodes.contains_key(&element)
    }

    fn value(&self, element: Element) -> Option<String> {
        self.node(element).map(|node| node.value.clone())
    }

    fn set_value(&mut self, element: Element, value: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.value = value.to_string();
        }
    }

    fn set_text(&mut self, element: Element, text: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.text = Some(text.to_string());
            self.events.push(PageEvent::Text(element, text.to_string()));
        }
    }

    fn set_items(&mut self, element: Element, items: Vec<ListItem>) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.items = items.clone();
            self.events.push(PageEvent::Items(element, items));
        }
    }

    fn set_class(&mut self, element: Element, class: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            node.class = class.to_string();
            self.events.push(PageEvent::Class(element, class.to_string()));
        }
    }

    fn alert(&mut self, message: &str) {
        self.events.push(PageEvent::Alert(message.to_string()));
    }

    fn navigate(&mut self, route: &str) {
        self.events.push(PageEvent::Navigate(route.to_string()));
    }
}
