use color_print::cformat;
use strum::IntoEnumIterator;

use crate::state::{BottomTab, EditorState, InspectorTab};

const RULE: &str = "+-----------------------------------------------------------+";

/// Toolbar line: target and the active file's name.
pub fn header(state: &EditorState) -> String {
    let title = state.active().map(|f| f.name.as_str()).unwrap_or("-");
    cformat!("[<c>{}</>] <bold>{}</>", state.arch, title)
}

pub fn explorer(state: &EditorState) -> String {
    let mut out = vec![cformat!("<bold>EXPLORER</>")];
    for file in &state.files {
        if file.id == state.active_id {
            out.push(cformat!(" <g>*</> <bold>{}</>", file.name));
        } else {
            out.push(format!("   {}", file.name));
        }
    }
    out.join("\n")
}

/// Buffer with the line-number gutter.
pub fn editor(state: &EditorState) -> String {
    state
        .gutter()
        .into_iter()
        .zip(state.buffer.split('\n'))
        .map(|(no, line)| cformat!("<blue>{:>4} |</> {}", no, line))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn registers(state: &EditorState) -> String {
    let cells: Vec<String> = state
        .regs
        .iter()
        .map(|(reg, value)| format!("{:>5}: {:<16}", reg.to_string(), value))
        .collect();

    let mut out = vec![" +-------------------------+-------------------------+".to_string()];
    for row in cells.chunks(2) {
        let right = row.get(1).map(|s| s.as_str()).unwrap_or("");
        out.push(format!(" | {:<23} | {:<23} |", row[0], right));
    }
    out.push(" +-------------------------+-------------------------+".to_string());
    out.join("\n")
}

pub fn inspector(state: &EditorState) -> String {
    let body = match state.inspector_tab {
        InspectorTab::Regs => registers(state),
        InspectorTab::Mem => "(memory view not available)".to_string(),
        InspectorTab::Stack => "(stack view not available)".to_string(),
    };
    format!("{}\n{}", tabs(InspectorTab::iter(), state.inspector_tab), body)
}

pub fn bottom(state: &EditorState) -> String {
    let body = match state.bottom_tab {
        BottomTab::Problems => match state.problems.is_empty() {
            true => "No problems found.".to_string(),
            false => state.problems.join("\n"),
        },
        BottomTab::Output => state.output.join("\n"),
        BottomTab::Listing => match state.listing.is_empty() {
            true => "(empty)".to_string(),
            false => state.listing.clone(),
        },
    };
    format!("{}\n{}", tabs(BottomTab::iter(), state.bottom_tab), body)
}

/// Whole screen, top to bottom.
pub fn render(state: &EditorState) -> String {
    [
        RULE.to_string(),
        header(state),
        RULE.to_string(),
        explorer(state),
        RULE.to_string(),
        editor(state),
        RULE.to_string(),
        inspector(state),
        RULE.to_string(),
        bottom(state),
        RULE.to_string(),
    ]
    .join("\n")
}

fn tabs<T: PartialEq + std::fmt::Display>(all: impl Iterator<Item = T>, active: T) -> String {
    all.map(|t| match t == active {
        true => cformat!("<bold,underline> {} </>", t),
        false => format!(" {} ", t),
    })
    .collect::<Vec<_>>()
    .join("|")
}
