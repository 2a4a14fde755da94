use shared_types::Rating;

/// Map years of experience onto a seniority band; lower bounds are inclusive
pub fn rating_from_years(years: Option<f64>) -> Rating {
    match years {
        None => Rating::Unknown,
        Some(years) if years.is_nan() => Rating::Unknown,
        Some(years) if years < 1.0 => Rating::EntryLevel,
        Some(years) if years < 2.0 => Rating::Junior,
        Some(years) if years < 5.0 => Rating::MidLevel,
        Some(_) => Rating::Senior,
    }
}
