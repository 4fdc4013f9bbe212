//! Month and week day enumerations.

use crate::error::datetime::DateTimeError;

/// Month of the year, ordered from January to December
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Month {
    /// January
    January = 1,
    /// February
    February = 2,
    /// March
    March = 3,
    /// April
    April = 4,
    /// May
    May = 5,
    /// June
    June = 6,
    /// July
    July = 7,
    /// August
    August = 8,
    /// September
    September = 9,
    /// October
    October = 10,
    /// November
    November = 11,
    /// December
    December = 12,
}

impl Month {
    /// All months, in calendar order
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Returns the month number in `[1, 12]`
    #[cfg_attr(feature = "const", const_fn::const_fn("1.61"))]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns the month with the specified number in `[1, 12]`
    #[cfg_attr(feature = "const", const_fn::const_fn("1.61"))]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=12 => Some(Self::ALL[number as usize - 1]),
            _ => None,
        }
    }

    /// Returns the next month, wrapping from December to January
    pub fn succ(self) -> Self {
        Self::ALL[self as usize % 12]
    }

    /// Returns the previous month, wrapping from January to December
    pub fn pred(self) -> Self {
        Self::ALL[(self as usize + 10) % 12]
    }

    /// Zero-based index in `[0, 11]`, used to address month tables
    pub(crate) fn index(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for Month {
    type Error = DateTimeError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or(DateTimeError::InvalidMonth)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

/// Day of the week
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Weekday {
    /// Sunday
    Sunday,
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
}

impl Weekday {
    /// All week days, starting from Sunday
    pub const ALL: [Self; 7] = [Self::Sunday, Self::Monday, Self::Tuesday, Self::Wednesday, Self::Thursday, Self::Friday, Self::Saturday];

    /// Returns days since Sunday in `[0, 6]`
    pub const fn days_since_sunday(self) -> u8 {
        self as u8
    }

    /// Returns the week day from a number of days since Sunday in `[0, 6]`
    pub const fn from_days_since_sunday(days: u8) -> Option<Self> {
        match days {
            0..=6 => Some(Self::ALL[days as usize]),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateTimeError;

    fn try_from(days: u8) -> Result<Self, Self::Error> {
        Self::from_days_since_sunday(days).ok_or(DateTimeError::InvalidWeekDay)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Month {
    fn arbitrary(g: &mut quickcheck::Gen) -> Month {
        *g.choose(&Month::ALL).unwrap()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_month_numbers() {
        for (index, month) in Month::ALL.into_iter().enumerate() {
            assert_eq!(month.number() as usize, index + 1);
            assert_eq!(Month::from_number(month.number()), Some(month));
            assert_eq!(Month::try_from(month.number()), Ok(month));
        }

        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
        assert_eq!(Month::try_from(13), Err(DateTimeError::InvalidMonth));
    }

    #[test]
    fn test_month_order() {
        assert!(Month::January < Month::February);
        assert!(Month::November < Month::December);
        assert!(Month::ALL.windows(2).all(|x| x[0] < x[1]));

        assert_eq!(Month::January.succ(), Month::February);
        assert_eq!(Month::December.succ(), Month::January);
        assert_eq!(Month::January.pred(), Month::December);
        assert_eq!(Month::March.pred(), Month::February);
    }

    #[test]
    fn test_week_day() {
        assert_eq!(Weekday::Sunday.days_since_sunday(), 0);
        assert_eq!(Weekday::Saturday.days_since_sunday(), 6);
        assert_eq!(Weekday::from_days_since_sunday(4), Some(Weekday::Thursday));
        assert_eq!(Weekday::from_days_since_sunday(7), None);
        assert_eq!(Weekday::try_from(7), Err(DateTimeError::InvalidWeekDay));
    }
}
