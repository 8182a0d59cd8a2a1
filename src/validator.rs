use std::collections::HashSet;

use crate::content::{Page, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind { Error, Warning }

#[derive(Debug, Clone)]
pub struct PageIssue {
    pub section: String,
    pub message: String,
    pub kind: IssueKind,
}

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub issues: Vec<PageIssue>,
}

impl ValidationResult {
    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.kind == IssueKind::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.iter().filter(|i| i.kind == IssueKind::Warning).count()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check a parsed page for broken anchors and degenerate sections
pub fn validate_page(page: &Page) -> ValidationResult {
    let mut issues = Vec::new();

    // Duplicate section ids make anchor targets ambiguous
    let mut seen = HashSet::new();
    for section in &page.sections {
        if !seen.insert(section.id()) {
            issues.push(PageIssue {
                section: section.id().to_string(),
                message: "duplicate section id".to_string(),
                kind: IssueKind::Error,
            });
        }
    }

    // Every nav link must resolve to a section
    for link in &page.nav {
        if page.section(&link.target).is_none() {
            issues.push(PageIssue {
                section: link.target.clone(),
                message: format!("nav link '{}' points to missing section", link.label),
                kind: IssueKind::Error,
            });
        }
    }

    if page.nav.len() > 9 {
        issues.push(PageIssue {
            section: "nav".to_string(),
            message: format!(
                "{} nav links; only the first 9 are reachable by number key",
                page.nav.len()
            ),
            kind: IssueKind::Warning,
        });
    }

    for section in &page.sections {
        match section {
            Section::Hero { tagline, .. } => {
                if tagline.is_empty() {
                    issues.push(PageIssue {
                        section: section.id().to_string(),
                        message: "hero tagline is empty; typing effect will be disabled"
                            .to_string(),
                        kind: IssueKind::Warning,
                    });
                }
            }
            Section::Tabs { buttons, panes, .. } => {
                let mut keys = HashSet::new();
                for pane in panes {
                    if !keys.insert(pane.key.as_str()) {
                        issues.push(PageIssue {
                            section: section.id().to_string(),
                            message: format!("duplicate pane key '{}'", pane.key),
                            kind: IssueKind::Warning,
                        });
                    }
                }
                for button in buttons {
                    if !panes.iter().any(|p| p.key == button.target) {
                        issues.push(PageIssue {
                            section: section.id().to_string(),
                            message: format!(
                                "tab button '{}' targets missing pane '{}'",
                                button.label, button.target
                            ),
                            kind: IssueKind::Error,
                        });
                    }
                }
            }
            Section::Gallery { slides, .. } => {
                if slides.is_empty() {
                    issues.push(PageIssue {
                        section: section.id().to_string(),
                        message: "gallery has no slides; controls will be disabled".to_string(),
                        kind: IssueKind::Warning,
                    });
                }
            }
            _ => {}
        }
    }

    ValidationResult { issues }
}
