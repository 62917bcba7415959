use chrono::{Datelike, Duration, NaiveDate, Utc};

/// Period granularity of the date filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Yearly,
    Monthly,
    Weekly,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [
        Granularity::Yearly,
        Granularity::Monthly,
        Granularity::Weekly,
    ];

    /// Value of the `type` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Yearly => "yearly",
            Granularity::Monthly => "monthly",
            Granularity::Weekly => "weekly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Granularity::Yearly => "Yearly",
            Granularity::Monthly => "Monthly",
            Granularity::Weekly => "Weekly",
        }
    }
}

/// Shared date filter of the labour summary
///
/// `month` is needed for monthly and weekly, `reference_date` for weekly only.
/// The struct does not enforce this; use [`DateFilter::is_complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFilter {
    pub granularity: Granularity,
    pub year: i32,
    pub month: Option<u32>,
    pub reference_date: Option<NaiveDate>,
}

impl DateFilter {
    pub fn yearly(year: i32) -> Self {
        Self {
            granularity: Granularity::Yearly,
            year,
            month: None,
            reference_date: None,
        }
    }

    pub fn monthly(year: i32, month: u32) -> Self {
        Self {
            granularity: Granularity::Monthly,
            year,
            month: Some(month),
            reference_date: None,
        }
    }

    /// Weekly filter around `date`; year and month are taken from the date
    pub fn weekly(date: NaiveDate) -> Self {
        Self {
            granularity: Granularity::Weekly,
            year: date.year(),
            month: Some(date.month()),
            reference_date: Some(date),
        }
    }

    /// Current calendar year, yearly granularity
    pub fn current_year() -> Self {
        Self::yearly(Utc::now().date_naive().year())
    }

    /// Switch granularity keeping whatever period fields still apply
    pub fn with_granularity(&self, granularity: Granularity) -> Self {
        let mut next = self.clone();
        next.granularity = granularity;
        if granularity == Granularity::Yearly {
            next.month = None;
            next.reference_date = None;
        }
        if granularity == Granularity::Monthly {
            next.reference_date = None;
        }
        next
    }

    /// Change the year; a weekly reference date survives only if it is in that year
    pub fn with_year(&self, year: i32) -> Self {
        let mut next = self.clone();
        next.year = year;
        next.reference_date = self.reference_date.filter(|d| d.year() == year);
        next
    }

    /// Change the month; a weekly reference date survives only if it is in that month
    pub fn with_month(&self, month: Option<u32>) -> Self {
        let mut next = self.clone();
        next.month = month;
        next.reference_date = self
            .reference_date
            .filter(|d| d.year() == self.year && Some(d.month()) == month);
        next
    }

    fn has_valid_month(&self) -> bool {
        matches!(self.month, Some(m) if (1..=12).contains(&m))
    }

    /// Whether the filter carries every field its granularity needs
    pub fn is_complete(&self) -> bool {
        match self.granularity {
            Granularity::Yearly => true,
            Granularity::Monthly => self.has_valid_month(),
            Granularity::Weekly => self.has_valid_month() && self.reference_date.is_some(),
        }
    }

    /// Monday..Sunday of the reference date's week
    pub fn week_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let date = self.reference_date?;
        let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        Some((start, start + Duration::days(6)))
    }

    /// Query pairs in wire order: type, year, month, date
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("type", self.granularity.as_str().to_string()),
            ("year", self.year.to_string()),
        ];
        if self.granularity != Granularity::Yearly {
            if let Some(month) = self.month {
                pairs.push(("month", month.to_string()));
            }
        }
        if self.granularity == Granularity::Weekly {
            if let Some(date) = self.reference_date {
                pairs.push(("date", date.format("%Y-%m-%d").to_string()));
            }
        }
        pairs
    }

    /// Human readable period, e.g. "2024", "March 2024", "Week 2024-03-11 – 2024-03-17"
    pub fn label(&self) -> String {
        match self.granularity {
            Granularity::Yearly => self.year.to_string(),
            Granularity::Monthly => self
                .month
                .and_then(|m| NaiveDate::from_ymd_opt(self.year, m, 1))
                .map(|d| d.format("%B %Y").to_string())
                .unwrap_or_else(|| format!("{} (month not set)", self.year)),
            Granularity::Weekly => match self.week_range() {
                Some((from, to)) => format!(
                    "Week {} – {}",
                    from.format("%Y-%m-%d"),
                    to.format("%Y-%m-%d")
                ),
                None => "Week (date not set)".to_string(),
            },
        }
    }
}

impl Default for DateFilter {
    fn default() -> Self {
        Self::current_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_is_current_year() {
        let filter = DateFilter::default();
        assert_eq!(filter.granularity, Granularity::Yearly);
        assert_eq!(filter.year, Utc::now().date_naive().year());
        assert!(filter.is_complete());
    }

    #[test]
    fn test_completeness() {
        assert!(DateFilter::yearly(2024).is_complete());
        assert!(DateFilter::monthly(2024, 3).is_complete());
        assert!(!DateFilter::monthly(2024, 13).is_complete());
        assert!(DateFilter::weekly(date(2024, 3, 13)).is_complete());

        let no_date = DateFilter::monthly(2024, 3).with_granularity(Granularity::Weekly);
        assert!(!no_date.is_complete());

        let no_month = DateFilter::yearly(2024).with_granularity(Granularity::Monthly);
        assert!(!no_month.is_complete());
    }

    #[test]
    fn test_query_pairs() {
        assert_eq!(
            DateFilter::yearly(2024).query_pairs(),
            vec![("type", "yearly".to_string()), ("year", "2024".to_string())]
        );
        assert_eq!(
            DateFilter::weekly(date(2024, 3, 13)).query_pairs(),
            vec![
                ("type", "weekly".to_string()),
                ("year", "2024".to_string()),
                ("month", "3".to_string()),
                ("date", "2024-03-13".to_string()),
            ]
        );
    }

    #[test]
    fn test_yearly_drops_stale_month() {
        let filter = DateFilter::monthly(2024, 5).with_granularity(Granularity::Yearly);
        assert_eq!(filter.month, None);
        assert_eq!(filter.query_pairs().len(), 2);
    }

    #[test]
    fn test_weekly_year_edit_keeps_matching_date() {
        let weekly = DateFilter::weekly(date(2024, 3, 13));
        let same = weekly.with_year(2024);
        assert_eq!(same.reference_date, Some(date(2024, 3, 13)));
        assert!(same.is_complete());

        let other = weekly.with_year(2023);
        assert_eq!(other.year, 2023);
        assert_eq!(other.reference_date, None);
        assert!(!other.is_complete());
    }

    #[test]
    fn test_weekly_month_edit_keeps_matching_date() {
        let weekly = DateFilter::weekly(date(2024, 3, 13));
        assert!(weekly.with_month(Some(3)).is_complete());

        let april = weekly.with_month(Some(4));
        assert_eq!(april.month, Some(4));
        assert_eq!(april.reference_date, None);

        let monthly = DateFilter::monthly(2024, 3).with_month(None);
        assert!(!monthly.is_complete());
    }

    #[test]
    fn test_labels() {
        assert_eq!(DateFilter::yearly(2024).label(), "2024");
        assert_eq!(DateFilter::monthly(2024, 3).label(), "March 2024");
        assert_eq!(
            DateFilter::weekly(date(2024, 3, 13)).label(),
            "Week 2024-03-11 – 2024-03-17"
        );
    }

    #[test]
    fn test_granularity_parse() {
        assert_eq!(Granularity::parse("weekly"), Some(Granularity::Weekly));
        assert_eq!(Granularity::parse("daily"), None);
    }
}
