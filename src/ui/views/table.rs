//! The launch table view.
//!
//! Renders the visible page of records as a table: a header row with sort
//! indicators and a column cursor, one body row per record, and a footer
//! control bar with the page-size selector and the page navigator. The
//! header never scrolls away, and a configurable number of left/right
//! columns stays pinned while the middle columns scroll horizontally when
//! the terminal is too narrow.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Cell as TableCell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::model::{Column, Record, SortDirection, SortSpec, ViewModel};
use crate::ui::theme::Theme;

/// Fixed rendered width of one column, in characters.
const COLUMN_WIDTH: u16 = 22;

/// Maximum number of page-number slots in the footer strip.
const MAX_PAGE_SLOTS: usize = 9;

/// Everything the table view needs from the application to draw one frame.
pub struct TableContext<'a> {
    /// Column definitions, in render order.
    pub columns: &'a [Column],
    /// The derived page view.
    pub view: &'a ViewModel,
    /// The active sort directive, if any.
    pub sort: Option<&'a SortSpec>,
    /// Page-size currently in effect.
    pub page_size: usize,
    /// Leading pinned column count.
    pub left_fixed: usize,
    /// Trailing pinned column count (honored only when no left pins).
    pub right_fixed: usize,
    /// Color theme.
    pub theme: &'a Theme,
}

/// View state owned by the table: cursor, selection, and column scroll.
///
/// None of this is part of the view-model; it only affects presentation.
#[derive(Debug, Default)]
pub struct TableView {
    /// Index of the focused column, into the full column list.
    cursor: usize,
    /// Selected row within the current page.
    selected_row: usize,
    /// Scroll offset into the scrollable (non-pinned) columns.
    col_offset: usize,
}

impl TableView {
    /// Create a new table view.
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused column index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The selected row within the current page.
    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Move the column cursor one step left.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the column cursor one step right.
    pub fn cursor_right(&mut self, column_count: usize) {
        if self.cursor + 1 < column_count {
            self.cursor += 1;
        }
    }

    /// Move the row selection up within the page.
    pub fn select_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Move the row selection down within the page.
    pub fn select_down(&mut self, row_count: usize) {
        if self.selected_row + 1 < row_count {
            self.selected_row += 1;
        }
    }

    /// Clamp the selection after the page contents changed.
    pub fn clamp_selection(&mut self, row_count: usize) {
        if row_count == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= row_count {
            self.selected_row = row_count - 1;
        }
    }

    /// Render the table into `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &TableContext) {
        let [table_area, footer_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        let max_visible = ((table_area.width / (COLUMN_WIDTH + 1)) as usize).max(1);
        let plan = plan_columns(
            ctx.columns.len(),
            ctx.left_fixed,
            ctx.right_fixed,
            max_visible,
            self.col_offset,
            self.cursor,
        );
        self.col_offset = plan.offset;

        let header = Row::new(
            plan.visible
                .iter()
                .map(|&i| self.header_cell(i, ctx))
                .collect::<Vec<_>>(),
        )
        .height(1);

        let rows: Vec<Row> = ctx
            .view
            .rows
            .iter()
            .map(|record| {
                Row::new(
                    plan.visible
                        .iter()
                        .map(|&i| body_cell(record, &ctx.columns[i]))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        let widths = vec![Constraint::Length(COLUMN_WIDTH); plan.visible.len()];
        let table = Table::new(rows, widths)
            .header(header)
            .highlight_style(ctx.theme.row_highlight_style());

        let mut state = TableState::default();
        if !ctx.view.rows.is_empty() {
            state.select(Some(self.selected_row.min(ctx.view.rows.len() - 1)));
        }
        frame.render_stateful_widget(table, table_area, &mut state);

        self.render_footer(frame, footer_area, ctx);
    }

    /// Build the header cell for column `i`, with sort indicator and cursor
    /// highlight.
    fn header_cell<'a>(&self, i: usize, ctx: &TableContext<'a>) -> TableCell<'a> {
        let column = &ctx.columns[i];
        let mut spans = vec![Span::raw(column.key.clone())];

        if column.sortable {
            let arrow = match ctx.sort {
                Some(spec) if spec.key == column.key => match spec.direction {
                    SortDirection::Ascending => Span::styled(" ▲", ctx.theme.accent_style()),
                    SortDirection::Descending => Span::styled(" ▼", ctx.theme.accent_style()),
                },
                _ => Span::styled(" ↕", ctx.theme.dim_style()),
            };
            spans.push(arrow);
        }

        let style = if i == self.cursor {
            ctx.theme.header_cursor_style()
        } else {
            ctx.theme.header_style()
        };

        TableCell::from(Line::from(spans)).style(style)
    }

    /// Render the footer control bar: page size, prev, page strip, next.
    fn render_footer(&self, frame: &mut Frame, area: Rect, ctx: &TableContext) {
        let mut spans: Vec<Span> = Vec::new();

        spans.push(Span::styled(
            format!(" {}/page ", ctx.page_size),
            ctx.theme.accent_style(),
        ));

        let at_first = ctx.view.current_page == 1;
        let at_last = ctx.view.current_page == ctx.view.total_pages;

        spans.push(Span::styled(
            "‹ prev ",
            if at_first {
                ctx.theme.dim_style()
            } else {
                ctx.theme.accent_style()
            },
        ));

        for item in page_strip(ctx.view.current_page, ctx.view.total_pages, MAX_PAGE_SLOTS) {
            match item {
                PageItem::Number(n) if n == ctx.view.current_page => {
                    spans.push(Span::styled(format!("[{}] ", n), ctx.theme.accent_style()));
                }
                PageItem::Number(n) => {
                    spans.push(Span::raw(format!(" {}  ", n)));
                }
                PageItem::Ellipsis => {
                    spans.push(Span::styled(" …  ", ctx.theme.dim_style()));
                }
            }
        }

        spans.push(Span::styled(
            "next ›",
            if at_last {
                ctx.theme.dim_style()
            } else {
                ctx.theme.accent_style()
            },
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Build the body cell for one record/column pair. Numbers are
/// right-aligned, text left-aligned, missing fields empty.
fn body_cell<'a>(record: &Record, column: &Column) -> TableCell<'a> {
    match record.get(&column.key) {
        Some(cell) => {
            let alignment = if cell.is_number() {
                Alignment::Right
            } else {
                Alignment::Left
            };
            TableCell::from(Text::from(cell.display()).alignment(alignment))
        }
        None => TableCell::from(""),
    }
}

/// The outcome of column planning: which column indices to render and the
/// (possibly adjusted) scroll offset.
#[derive(Debug, PartialEq, Eq)]
pub struct ColumnPlan {
    /// Indices into the full column list, in render order.
    pub visible: Vec<usize>,
    /// Clamped scroll offset into the scrollable columns.
    pub offset: usize,
}

/// Choose which columns are visible for the available width.
///
/// Pinned columns are always included: `left_fixed` from the front, or,
/// when no left pins are configured, `right_fixed` from the back. The
/// remaining slots show a contiguous window of the scrollable columns,
/// scrolled so the cursor stays visible.
pub fn plan_columns(
    total: usize,
    left_fixed: usize,
    right_fixed: usize,
    max_visible: usize,
    offset: usize,
    cursor: usize,
) -> ColumnPlan {
    if total == 0 {
        return ColumnPlan {
            visible: Vec::new(),
            offset: 0,
        };
    }

    if total <= max_visible {
        return ColumnPlan {
            visible: (0..total).collect(),
            offset: 0,
        };
    }

    let pinned_left = left_fixed.min(total);
    // Right pins are only honored without left pins, matching the original
    // layout rules.
    let pinned_right = if pinned_left > 0 {
        0
    } else {
        right_fixed.min(total)
    };

    let scroll_start = pinned_left;
    let scroll_end = total - pinned_right;
    let scroll_count = scroll_end - scroll_start;

    // Pins can cover the whole column list; then there is no scroll window
    // and the plan is just the pins themselves.
    if scroll_count == 0 {
        return ColumnPlan {
            visible: (0..total).collect(),
            offset: 0,
        };
    }

    // At least one scrollable column stays visible even when pins alone
    // would fill the width.
    let budget = max_visible.saturating_sub(pinned_left + pinned_right).max(1);
    let budget = budget.min(scroll_count);

    let max_offset = scroll_count.saturating_sub(budget);
    let mut offset = offset.min(max_offset);

    // Follow the cursor when it points into the scrollable region.
    if cursor >= scroll_start && cursor < scroll_end {
        let rel = cursor - scroll_start;
        if rel < offset {
            offset = rel;
        } else if rel >= offset + budget {
            offset = rel + 1 - budget;
        }
    }

    let mut visible: Vec<usize> = (0..pinned_left).collect();
    visible.extend(scroll_start + offset..scroll_start + offset + budget);
    visible.extend(scroll_end..total);

    ColumnPlan { visible, offset }
}

/// One slot in the footer page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number.
    Number(usize),
    /// A gap in the strip.
    Ellipsis,
}

/// Lay out the `1..=total` page numbers into at most `max_slots` slots,
/// keeping the first page, the last page, and a window around the current
/// page, with ellipses for the gaps.
pub fn page_strip(current: usize, total: usize, max_slots: usize) -> Vec<PageItem> {
    if total <= max_slots {
        return (1..=total).map(PageItem::Number).collect();
    }

    // First, last, two ellipses: the window gets the remaining slots.
    let window = max_slots.saturating_sub(4).max(1);
    let half = window / 2;

    let mut start = current.saturating_sub(half).max(2);
    let mut end = start + window - 1;
    if end >= total {
        end = total - 1;
        start = end + 1 - window;
    }

    let mut items = vec![PageItem::Number(1)];
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Number));
    if end < total - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Number(total));
    items
}
