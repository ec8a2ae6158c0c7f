//! SQL for the `hoteis` table.
//!
//! Search filters are rendered as positional placeholders; their values only
//! ever travel in [`HotelQuery::params`].

use crate::models::search::SearchCriteria;

macro_rules! select_hotels {
    () => {
        "SELECT id, nome, cidade, estado, preco::float8 AS preco, \
         descricao, avaliacao::float8 AS avaliacao, imagem_url FROM hoteis"
    };
}

const SELECT_HOTELS: &str = select_hotels!();

pub const SELECT_HOTEL_BY_ID: &str = concat!(select_hotels!(), " WHERE id = $1");

/// A value bound to a `$N` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Float(f64),
}

/// Query template plus its bound values. `params[i]` binds to `$(i + 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelQuery {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl HotelQuery {
    /// Add `clause` with its `?` marker replaced by the next placeholder.
    fn push(&mut self, predicates: &mut Vec<String>, clause: &str, value: BindValue) {
        self.params.push(value);
        predicates.push(clause.replace('?', &format!("${}", self.params.len())));
    }
}

/// Build the search query for `criteria`. Fields are visited as city, state,
/// min price, max price; absent fields add nothing. Text is bound as given and
/// lower-cased by PostgreSQL on both sides of the comparison.
pub fn build_search_query(criteria: &SearchCriteria) -> HotelQuery {
    let mut query = HotelQuery {
        sql: SELECT_HOTELS.to_string(),
        params: Vec::new(),
    };
    let mut predicates = Vec::new();

    if let Some(city) = &criteria.city {
        let pattern = format!("%{}%", escape_like_pattern(city));
        query.push(&mut predicates, "LOWER(cidade) LIKE LOWER(?)", BindValue::Text(pattern));
    }
    if let Some(state) = &criteria.state {
        query.push(
            &mut predicates,
            "LOWER(estado) = LOWER(?)",
            BindValue::Text(state.clone()),
        );
    }
    if let Some(min) = criteria.min_price {
        query.push(&mut predicates, "preco >= ?", BindValue::Float(min));
    }
    if let Some(max) = criteria.max_price {
        query.push(&mut predicates, "preco <= ?", BindValue::Float(max));
    }

    if !predicates.is_empty() {
        query.sql.push_str(" WHERE ");
        query.sql.push_str(&predicates.join(" AND "));
    }
    query.sql.push_str(" ORDER BY nome ASC");
    query
}

/// Escape LIKE metacharacters (`%`, `_`, `\`) so the input matches literally
/// under PostgreSQL's default `\` escape character.
pub fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
