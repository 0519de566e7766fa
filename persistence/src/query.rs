use std::fmt::Display;

/// How the total row count is computed by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    Exact,
}

impl Count {
    fn as_str(&self) -> &'static str {
        match self {
            Count::Exact => "exact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Descending,
}

impl Order {
    fn as_str(&self) -> &'static str {
        match self {
            Order::Descending => "desc",
        }
    }
}

/// A single column filter, rendered as `column.operator.pattern`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    column: String,
    operator: &'static str,
    pattern: String,
}

impl Filter {
    /// Case-insensitive pattern match, `*` acts as the `%` wildcard
    pub fn ilike(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            operator: "ilike",
            pattern: pattern.into(),
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.column, self.operator, self.pattern)
    }
}

/// Builder for a read-only select against one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    table: String,
    count: Option<Count>,
    or: Vec<Filter>,
    range: Option<(u64, u64)>,
    order: Option<(String, Order)>,
}

impl Select {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            count: None,
            or: Vec::new(),
            range: None,
            order: None,
        }
    }

    pub fn count(mut self, count: Count) -> Self {
        self.count = Some(count);
        self
    }

    /// Rows match when any of the filters matches
    pub fn or<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = Filter>,
    {
        self.or.extend(filters);
        self
    }

    /// Zero-based, both ends inclusive
    pub fn range(mut self, start: u64, end: u64) -> Self {
        self.range = Some((start, end));
        self
    }

    pub fn order(mut self, column: impl Into<String>, order: Order) -> Self {
        self.order = Some((column.into(), order));
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn count_mode(&self) -> Option<Count> {
        self.count
    }

    pub fn or_filters(&self) -> &[Filter] {
        &self.or
    }

    pub fn row_range(&self) -> Option<(u64, u64)> {
        self.range
    }

    pub fn ordering(&self) -> Option<(&str, Order)> {
        self.order.as_ref().map(|(column, order)| (column.as_str(), *order))
    }

    /// Query string parameters understood by the REST endpoint
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("select", "*".to_owned())];
        if !self.or.is_empty() {
            let filters = self
                .or
                .iter()
                .map(Filter::to_string)
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("or", format!("({})", filters)));
        }
        if let Some((column, order)) = &self.order {
            pairs.push(("order", format!("{}.{}", column, order.as_str())));
        }
        if let Some((start, end)) = self.range {
            pairs.push(("offset", start.to_string()));
            pairs.push(("limit", (end.saturating_sub(start) + 1).to_string()));
        }
        pairs
    }

    /// Value of the `Prefer` header, if any
    pub fn prefer_header(&self) -> Option<String> {
        self.count.map(|count| format!("count={}", count.as_str()))
    }
}
