use crate::lexar::token::DataType;
use std::collections::HashMap;
use std::fmt;

/// Whether a table entry names a variable or a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Variable,
    Function,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Variable => f.write_str("variable"),
            EntryKind::Function => f.write_str("function"),
        }
    }
}

/// Declared type column: a data type for variables, a marker for functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolType {
    Data(DataType),
    Function,
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolType::Data(ty) => write!(f, "{}", ty),
            SymbolType::Function => f.write_str("function"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub ty: SymbolType,
    pub size: Option<usize>,
    /// Always one-dimensional for variables; functions have none.
    pub dimension: Option<usize>,
    pub declared_line: usize,
    pub used_line: Option<usize>,
    pub address: usize,
    pub kind: EntryKind,
}

impl SymbolEntry {
    pub fn is_function(&self) -> bool {
        self.kind == EntryKind::Function
    }

    pub fn data_type(&self) -> Option<DataType> {
        match self.ty {
            SymbolType::Data(ty) => Some(ty),
            SymbolType::Function => None,
        }
    }
}

/// Append-only registry of declared names.
///
/// Entries keep insertion order, which also drives address assignment
/// (`address = 1 + entries before it`). Redeclaring a name appends a second
/// entry; lookups only ever see the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    first_by_name: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a variable entry and returns its address.
    pub fn add_variable(&mut self, name: &str, ty: DataType, line: usize) -> usize {
        self.push(SymbolEntry {
            name: name.to_string(),
            ty: SymbolType::Data(ty),
            size: Some(ty.size()),
            dimension: Some(1),
            declared_line: line,
            used_line: None,
            address: self.entries.len() + 1,
            kind: EntryKind::Variable,
        })
    }

    /// Appends a function entry and returns its address.
    pub fn add_function(&mut self, name: &str, line: usize) -> usize {
        self.push(SymbolEntry {
            name: name.to_string(),
            ty: SymbolType::Function,
            size: None,
            dimension: None,
            declared_line: line,
            used_line: None,
            address: self.entries.len() + 1,
            kind: EntryKind::Function,
        })
    }

    fn push(&mut self, entry: SymbolEntry) -> usize {
        let address = entry.address;
        self.first_by_name
            .entry(entry.name.clone())
            .or_insert(self.entries.len());
        self.entries.push(entry);
        address
    }

    /// First entry declared under `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<&SymbolEntry> {
        self.first_by_name.get(name).map(|&idx| &self.entries[idx])
    }

    /// Records `line` as the last use of the first entry named `name`.
    /// Returns false when the name is unknown.
    pub fn update_usage(&mut self, name: &str, line: usize) -> bool {
        match self.first_by_name.get(name) {
            Some(&idx) => {
                self.entries[idx].used_line = Some(line);
                true
            }
            None => false,
        }
    }

    pub fn all_entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const HEADERS: [&str; 8] = [
    "Name",
    "Type",
    "Size",
    "Dimension",
    "Line of Declaration",
    "Line of Usage",
    "Address",
    "Entry Type",
];

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Grid dump of the table, one row per entry in insertion order.
impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<[String; 8]> = self
            .entries
            .iter()
            .map(|e| {
                [
                    e.name.clone(),
                    e.ty.to_string(),
                    optional(e.size),
                    optional(e.dimension.map(|d| format!("{}D", d))),
                    e.declared_line.to_string(),
                    optional(e.used_line),
                    e.address.to_string(),
                    e.kind.to_string(),
                ]
            })
            .collect();

        let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let border: String = widths
            .iter()
            .map(|w| format!("+{}", "-".repeat(w + 2)))
            .collect::<String>()
            + "+";
        let header_border = border.replace('-', "=");

        writeln!(f, "{}", border)?;
        write_row(f, &HEADERS.map(String::from), &widths)?;
        writeln!(f, "{}", header_border)?;
        for row in &rows {
            write_row(f, row, &widths)?;
            writeln!(f, "{}", border)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String; 8], widths: &[usize]) -> fmt::Result {
    for (cell, width) in cells.iter().zip(widths) {
        write!(f, "| {:<width$} ", cell, width = width)?;
    }
    writeln!(f, "|")
}
