use std::collections::HashMap;

use super::{ElementId, TransactionRow, UiSurface};
use crate::utils::Table;

#[derive(Debug, Clone, Default)]
struct Element {
    text: String,
    class: String,
    visible: bool,
    rows: Vec<TransactionRow>,
}

/// Popup drawn as plain text on stdout
#[derive(Debug, Default)]
pub struct TerminalSurface {
    elements: HashMap<ElementId, Element>,
}

impl TerminalSurface {
    /// Surface with every popup element
    pub fn new() -> Self {
        Self::with_elements(&ElementId::ALL)
    }

    pub fn with_elements(ids: &[ElementId]) -> Self {
        let elements = ids
            .iter()
            .map(|&id| {
                let element = Element {
                    // Always-on controls
                    visible: matches!(
                        id,
                        ElementId::StatusIcon
                            | ElementId::StatusText
                            | ElementId::SortSelect
                            | ElementId::FilterSelect
                            | ElementId::TransactionList
                    ),
                    ..Element::default()
                };
                (id, element)
            })
            .collect();
        Self { elements }
    }

    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.elements.get(&id).map(|e| e.text.as_str())
    }

    pub fn class(&self, id: ElementId) -> Option<&str> {
        self.elements.get(&id).map(|e| e.class.as_str())
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        self.elements.get(&id).map(|e| e.visible).unwrap_or(false)
    }

    pub fn rows(&self, id: ElementId) -> &[TransactionRow] {
        self.elements.get(&id).map(|e| e.rows.as_slice()).unwrap_or(&[])
    }

    /// Text rendering of the visible elements
    pub fn frame(&self) -> String {
        let mut out = String::new();

        if self.is_visible(ElementId::ErrorMessage) {
            out.push_str(&format!("[!] {}\n", self.text(ElementId::ErrorMessage).unwrap_or_default()));
        }

        let icon = if self.class(ElementId::StatusIcon).unwrap_or_default().contains("connected") {
            "●"
        } else {
            "○"
        };
        out.push_str(&format!("{} {}\n", icon, self.text(ElementId::StatusText).unwrap_or_default()));

        if self.is_visible(ElementId::WalletInfo) {
            for id in [ElementId::WalletAddress, ElementId::WalletBalance] {
                if let Some(text) = self.text(id).filter(|t| !t.is_empty()) {
                    out.push_str(&format!("  {}\n", text));
                }
            }
        }

        let mut actions = Vec::new();
        if self.is_visible(ElementId::ConnectButton) {
            actions.push("connect");
        }
        if self.is_visible(ElementId::DisconnectButton) {
            actions.push("disconnect");
            actions.push("refresh");
        }
        out.push_str(&format!("Actions: {}\n", actions.join(", ")));
        out.push_str(&format!(
            "Sort: {} | Filter: {}\n",
            self.text(ElementId::SortSelect).unwrap_or_default(),
            self.text(ElementId::FilterSelect).unwrap_or_default()
        ));

        if self.is_visible(ElementId::TransactionList) {
            let mut table = Table::new(&["Signature", "Amount", "Time", "Type"]);
            for row in self.rows(ElementId::TransactionList) {
                table.add_row(vec![
                    row.signature.clone(),
                    row.amount.clone(),
                    row.time.clone(),
                    row.kind.clone(),
                ]);
            }
            out.push_str(&table.render());
            out.push('\n');
        }

        out
    }
}

impl UiSurface for TerminalSurface {
    fn has_element(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.text = text.to_string();
        }
    }

    fn set_class(&mut self, id: ElementId, class: &str) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.class = class.to_string();
        }
    }

    fn set_visible(&mut self, id: ElementId, visible: bool) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.visible = visible;
        }
    }

    fn set_rows(&mut self, id: ElementId, rows: &[TransactionRow]) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.rows = rows.to_vec();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PopupState;
    use crate::ui::{render, sync};

    #[test]
    fn test_disconnected_frame() {
        let mut surface = TerminalSurface::new();
        assert!(sync(&render(&PopupState::default()), &mut surface).is_empty());

        let frame = surface.frame();
        assert!(frame.contains("○ Not Connected"));
        assert!(frame.contains("Actions: connect\n"));
        assert!(frame.contains("Sort: date | Filter: all"));
        assert!(!frame.contains("[!]"));
    }
}
