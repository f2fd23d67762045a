use crate::models::{
    CalculationResult, HistoryEntry, INVALID_OPERATION, Operator, ResultValue, SessionInfo, Theme,
    UserRecord,
};
use crate::state::ViewState;
use crate::ui::{Element, ListItem, Page};

/// Elements that carry a theme class, with the base class each keeps.
pub const THEMED_ELEMENTS: [(Element, &str); 8] = [
    (Element::Container, "container"),
    (Element::SecondaryContainer, "container"),
    (Element::Operand1, "input"),
    (Element::Operand2, "input"),
    (Element::Operator, "select"),
    (Element::ThemeButton, "theme-button"),
    (Element::LoginField, "input"),
    (Element::PasswordField, "input"),
];

pub fn result_label(result: &CalculationResult) -> String {
    format!("Result: {}", result.display_value())
}

pub fn render_result(page: &mut impl Page, result: &CalculationResult) {
    page.set_text(Element::Result, &result_label(result));
}

pub fn render_session(page: &mut impl Page, info: &SessionInfo) {
    page.set_text(Element::Greeting, &format!("Hello, {}", info.display_name));
    if let Some(prefix) = info.hash_prefix() {
        page.set_text(Element::HashLabel, &format!("Your hash: {prefix}"));
    }
}

/// `"{num1} {symbol} {num2} = {result}"`; unknown operator ids show the raw id.
pub fn history_line(entry: &HistoryEntry) -> String {
    let symbol = Operator::from_id(entry.operator_id)
        .map(|op| op.symbol().to_string())
        .unwrap_or_else(|| entry.operator_id.to_string());
    let result = entry
        .result
        .as_ref()
        .map(ResultValue::to_string)
        .unwrap_or_else(|| INVALID_OPERATION.to_string());

    format!(
        "{} {symbol} {} = {result}",
        ResultValue::Number(entry.num1),
        ResultValue::Number(entry.num2),
    )
}

pub fn render_history(page: &mut impl Page, entries: &[HistoryEntry]) {
    let items = entries.iter().map(|entry| ListItem::text(history_line(entry))).collect();
    page.set_items(Element::HistoryList, items);
}

pub fn render_users(page: &mut impl Page, users: &[UserRecord]) {
    let items = users
        .iter()
        .map(|user| ListItem::with_control(format!("{} ({})", user.name, user.role), user.id.clone()))
        .collect();
    page.set_items(Element::UserList, items);
}

pub fn apply_theme(page: &mut impl Page, state: &ViewState) {
    for (element, base) in THEMED_ELEMENTS {
        if page.has(element) {
            page.set_class(element, &theme_class(base, state.theme));
        }
    }
}

fn theme_class(base: &str, theme: Theme) -> String {
    format!("{base} {}", theme.class_name())
}
