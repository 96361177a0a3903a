use indexmap::IndexMap;
use serde_json::{Map, Value, json};

use crate::core::Column;
use crate::core::palette::{LINE_DASH_SEQUENCE, PATTERN_SHAPE_SEQUENCE, SYMBOL_SEQUENCE};

const FACET_SPACING: f64 = 0.03;

/// Discrete columns that split rows into traces.
#[derive(Default)]
pub(super) struct GroupSpec<'a> {
    pub color: Option<&'a Column>,
    pub symbol: Option<&'a Column>,
    pub dash: Option<&'a Column>,
    pub pattern: Option<&'a Column>,
    pub line_group: Option<&'a Column>,
    pub facet_row: Option<&'a Column>,
    pub facet_col: Option<&'a Column>,
    /// Wide-form value columns; more than one yields a trace per column.
    pub variables: Vec<&'a Column>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct FacetCell {
    pub row: usize,
    pub col: usize,
}

pub(super) struct Group<'a> {
    pub rows: Vec<usize>,
    pub name: String,
    pub color: String,
    pub symbol: Option<&'static str>,
    pub dash: Option<&'static str>,
    pub pattern: Option<&'static str>,
    pub variable: Option<&'a Column>,
    pub cell: FacetCell,
    pub show_legend: bool,
}

pub(super) struct Grouping<'a> {
    pub groups: Vec<Group<'a>>,
    pub facet_rows: Vec<String>,
    pub facet_cols: Vec<String>,
    facet_row_name: Option<String>,
    facet_col_name: Option<String>,
}

fn cell_value(column: Option<&Column>, row: usize) -> String {
    column
        .and_then(|column| column.cells.get(row))
        .map(|cell| cell.display())
        .unwrap_or_default()
}

fn distinct(column: Option<&Column>) -> Vec<String> {
    column.map(Column::distinct).unwrap_or_default()
}

fn position(values: &[String], value: &str) -> usize {
    values.iter().position(|item| item == value).unwrap_or(0)
}

fn cycle<'s>(sequence: &[&'s str], index: usize) -> &'s str {
    sequence[index % sequence.len()]
}

impl<'a> Grouping<'a> {
    pub fn build(spec: &GroupSpec<'a>, row_count: usize, palette: &[String]) -> Self {
        let colors = distinct(spec.color);
        let symbols = distinct(spec.symbol);
        let dashes = distinct(spec.dash);
        let patterns = distinct(spec.pattern);
        let facet_rows = distinct(spec.facet_row);
        let facet_cols = distinct(spec.facet_col);
        let wide = spec.variables.len() > 1;
        let variable_count = if wide { spec.variables.len() } else { 1 };

        let mut keyed: IndexMap<(usize, Vec<String>), Vec<usize>> = IndexMap::new();
        for variable in 0..variable_count {
            for row in 0..row_count {
                let key = vec![
                    cell_value(spec.color, row),
                    cell_value(spec.symbol, row),
                    cell_value(spec.dash, row),
                    cell_value(spec.pattern, row),
                    cell_value(spec.line_group, row),
                    cell_value(spec.facet_row, row),
                    cell_value(spec.facet_col, row),
                ];
                keyed.entry((variable, key)).or_default().push(row);
            }
        }

        let mut seen_names: Vec<String> = Vec::new();
        let mut groups = Vec::with_capacity(keyed.len());
        for ((variable_index, key), rows) in keyed {
            let variable = if wide {
                spec.variables.get(variable_index).copied()
            } else {
                None
            };
            let color_index = if spec.color.is_some() {
                position(&colors, &key[0])
            } else {
                variable_index
            };
            let name = variable
                .map(|column| column.name.clone())
                .into_iter()
                .chain(key[..4].iter().filter(|part| !part.is_empty()).cloned())
                .collect::<Vec<_>>()
                .join(", ");
            let show_legend = !name.is_empty() && !seen_names.contains(&name);
            if show_legend {
                seen_names.push(name.clone());
            }
            groups.push(Group {
                rows,
                color: palette
                    .get(color_index % palette.len().max(1))
                    .cloned()
                    .unwrap_or_default(),
                symbol: spec
                    .symbol
                    .map(|_| cycle(SYMBOL_SEQUENCE, position(&symbols, &key[1]))),
                dash: spec
                    .dash
                    .map(|_| cycle(LINE_DASH_SEQUENCE, position(&dashes, &key[2]))),
                pattern: spec
                    .pattern
                    .map(|_| cycle(PATTERN_SHAPE_SEQUENCE, position(&patterns, &key[3]))),
                variable,
                cell: FacetCell {
                    row: position(&facet_rows, &key[5]),
                    col: position(&facet_cols, &key[6]),
                },
                name,
                show_legend,
            });
        }

        Self {
            groups,
            facet_rows,
            facet_cols,
            facet_row_name: spec.facet_row.map(|column| column.name.clone()),
            facet_col_name: spec.facet_col.map(|column| column.name.clone()),
        }
    }

    #[must_use]
    pub fn is_faceted(&self) -> bool {
        self.facet_row_name.is_some() || self.facet_col_name.is_some()
    }

    fn grid(&self) -> (usize, usize) {
        (self.facet_rows.len().max(1), self.facet_cols.len().max(1))
    }

    /// Axis suffix for a cell: `""` for the first, then `2`, `3`, ...
    #[must_use]
    pub fn axis_suffix(&self, cell: FacetCell) -> String {
        let (_, cols) = self.grid();
        let index = cell.row * cols + cell.col;
        if index == 0 {
            String::new()
        } else {
            (index + 1).to_string()
        }
    }

    /// `(xaxis, yaxis)` trace references for a cell.
    #[must_use]
    pub fn axis_refs(&self, cell: FacetCell) -> (String, String) {
        let suffix = self.axis_suffix(cell);
        (format!("x{suffix}"), format!("y{suffix}"))
    }

    /// Every `(xaxis, yaxis)` layout key pair in use.
    pub fn layout_axis_keys(&self) -> Vec<(String, String)> {
        let (rows, cols) = self.grid();
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| FacetCell { row, col }))
            .map(|cell| {
                let suffix = self.axis_suffix(cell);
                (format!("xaxis{suffix}"), format!("yaxis{suffix}"))
            })
            .collect()
    }

    /// Axis domains and facet label annotations for a faceted grid.
    pub fn facet_layout(&self) -> Map<String, Value> {
        let mut layout = Map::new();
        if !self.is_faceted() {
            return layout;
        }
        let (rows, cols) = self.grid();
        let width = (1.0 - FACET_SPACING * (cols as f64 - 1.0)) / cols as f64;
        let height = (1.0 - FACET_SPACING * (rows as f64 - 1.0)) / rows as f64;
        for row in 0..rows {
            for col in 0..cols {
                let cell = FacetCell { row, col };
                let suffix = self.axis_suffix(cell);
                let x0 = col as f64 * (width + FACET_SPACING);
                let y1 = 1.0 - row as f64 * (height + FACET_SPACING);
                layout.insert(
                    format!("xaxis{suffix}"),
                    json!({ "anchor": format!("y{suffix}"), "domain": [x0, x0 + width] }),
                );
                layout.insert(
                    format!("yaxis{suffix}"),
                    json!({ "anchor": format!("x{suffix}"), "domain": [y1 - height, y1] }),
                );
            }
        }

        let mut annotations = Vec::new();
        if let Some(name) = &self.facet_col_name {
            for (col, value) in self.facet_cols.iter().enumerate() {
                let x0 = col as f64 * (width + FACET_SPACING);
                annotations.push(json!({
                    "text": format!("{name}={value}"),
                    "x": x0 + width / 2.0,
                    "y": 1.0,
                    "xref": "paper",
                    "yref": "paper",
                    "xanchor": "center",
                    "yanchor": "bottom",
                    "showarrow": false,
                }));
            }
        }
        if let Some(name) = &self.facet_row_name {
            for (row, value) in self.facet_rows.iter().enumerate() {
                let y1 = 1.0 - row as f64 * (height + FACET_SPACING);
                annotations.push(json!({
                    "text": format!("{name}={value}"),
                    "x": 0.98,
                    "y": y1 - height / 2.0,
                    "xref": "paper",
                    "yref": "paper",
                    "xanchor": "left",
                    "yanchor": "middle",
                    "textangle": 90,
                    "showarrow": false,
                }));
            }
        }
        layout.insert("annotations".to_owned(), Value::Array(annotations));
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::{FacetCell, GroupSpec, Grouping};
    use crate::core::Column;

    fn palette() -> Vec<String> {
        vec!["#111111".to_owned(), "#222222".to_owned()]
    }

    #[test]
    fn rows_split_by_color_keep_first_appearance_order() {
        let color = Column::from_values("team", vec!["b", "a", "b", "c"]);
        let spec = GroupSpec {
            color: Some(&color),
            ..GroupSpec::default()
        };
        let grouping = Grouping::build(&spec, 4, &palette());
        let names: Vec<&str> = grouping.groups.iter().map(|group| group.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(grouping.groups[0].rows, vec![0, 2]);
        assert_eq!(grouping.groups[2].color, "#111111");
    }

    #[test]
    fn wide_form_yields_one_group_per_variable() {
        let a = Column::from_values("a", vec![1_i64, 2]);
        let b = Column::from_values("b", vec![3_i64, 4]);
        let spec = GroupSpec {
            variables: vec![&a, &b],
            ..GroupSpec::default()
        };
        let grouping = Grouping::build(&spec, 2, &palette());
        assert_eq!(grouping.groups.len(), 2);
        assert_eq!(grouping.groups[1].name, "b");
        assert_eq!(grouping.groups[1].color, "#222222");
    }

    #[test]
    fn facet_cells_map_to_numbered_axes() {
        let facet = Column::from_values("region", vec!["n", "s", "n"]);
        let spec = GroupSpec {
            facet_col: Some(&facet),
            ..GroupSpec::default()
        };
        let grouping = Grouping::build(&spec, 3, &palette());
        assert!(grouping.is_faceted());
        assert_eq!(
            grouping.axis_refs(FacetCell { row: 0, col: 1 }),
            ("x2".to_owned(), "y2".to_owned())
        );
        let layout = grouping.facet_layout();
        assert!(layout.contains_key("xaxis2"));
        assert_eq!(layout["annotations"].as_array().map(Vec::len), Some(2));
    }
}
