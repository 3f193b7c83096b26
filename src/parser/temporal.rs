// File: src/parser/temporal.rs
//! Resolves a concrete (date, start, end) from the raw utterance.
//!
//! The extractor always re-scans the *original* utterance: the normalizer
//! may have stripped exactly the phrases needed here. Every rule is an
//! explicit match/no-match branch; when nothing matches, the resolver
//! terminates at the documented defaults instead of erroring, so callers
//! always receive a usable span.

use crate::model::Locale;
use crate::parser::lexicon::{
    self, HOUR_UNITS, MINUTE_UNITS, PartOfDay, RANGE_CONNECTORS, ZH_CONNECTIVES,
};
use crate::parser::numerals;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Start time when neither a clock time nor a part-of-day keyword was
/// found. 10:00 is the documented choice: it is the dominant default in
/// both locale paths of this assistant's lineage.
pub const FALLBACK_START: (u32, u32) = (10, 0);
pub const DEFAULT_DURATION_MINS: i64 = 60;

const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalSpan {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// False when the date fell through to the locale fallback.
    pub date_explicit: bool,
    /// False when no clock time was matched and the start was defaulted.
    pub time_explicit: bool,
}

impl TemporalSpan {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Meridiem {
    Am,
    Pm,
}

/// A clock mention as written, before 12h/24h conversion and before the
/// period-adjustment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawClock {
    pub hour: u32,
    pub minute: u32,
    pub meridiem: Option<Meridiem>,
}

impl RawClock {
    fn new(hour: u32, minute: u32, meridiem: Option<Meridiem>) -> Self {
        Self { hour, minute, meridiem }
    }
}

/// Lexical scan results, shared by the extractor and the normalizer (which
/// needs to know which tokens were temporal so the title is not polluted).
#[derive(Debug, Default)]
pub(crate) struct Scan {
    pub clocks: Vec<RawClock>,
    pub duration_mins: Option<i64>,
    pub relative_days: Option<(i64, Option<PartOfDay>)>,
    pub next_weekday: Option<Weekday>,
    pub next_week: bool,
    pub weekday: Option<Weekday>,
    /// (year?, month, day); yearless forms are future-biased at resolution.
    pub absolute: Option<(Option<i32>, u32, u32)>,
    pub period: Option<PartOfDay>,
    /// English path: marks aligned with the token list.
    pub temporal_tokens: Vec<bool>,
    /// Chinese path: the utterance with temporal spans removed.
    pub residue: String,
}

pub fn resolve(text: &str, locale: Locale, now: NaiveDateTime) -> TemporalSpan {
    let scan = match locale {
        Locale::En => {
            let lower = text.to_lowercase();
            let tokens = lexicon::tokenize(&lower);
            scan_en(&lower, &tokens)
        }
        Locale::Zh => scan_zh(text),
    };
    resolve_from_scan(&scan, locale, now)
}

pub(crate) fn resolve_from_scan(scan: &Scan, locale: Locale, now: NaiveDateTime) -> TemporalSpan {
    let today = now.date();

    // Date rules in priority order; first match wins.
    let (date, date_explicit) = if let Some((offset, _)) = scan.relative_days {
        (today + Duration::days(offset), true)
    } else if let Some(wd) = scan.next_weekday {
        // "next X" is strictly after today; the walk below starts at
        // today+1, so a matching weekday lands a full 7 days out.
        (upcoming_weekday(today, wd), true)
    } else if scan.next_week {
        (today + Duration::days(7), true)
    } else if let Some(wd) = scan.weekday {
        (upcoming_weekday(today, wd), true)
    } else if let Some(d) = scan.absolute.and_then(|spec| absolute_date(spec, today)) {
        (d, true)
    } else {
        let fallback_offset = match locale {
            Locale::En => 1, // tomorrow
            Locale::Zh => 0, // today shifted by a detected offset; none detected
        };
        (today + Duration::days(fallback_offset), false)
    };

    let period = scan.period.or(scan.relative_days.and_then(|(_, p)| p));

    let mut time_explicit = true;
    let (start_min, end_min) = if scan.clocks.len() >= 2 {
        let (a, b) = inherit_meridiem(scan.clocks[0], scan.clocks[1]);
        (clock_minutes(a, period), clock_minutes(b, period))
    } else if let Some(&only) = scan.clocks.first() {
        let s = clock_minutes(only, period);
        let dur = scan.duration_mins.unwrap_or(DEFAULT_DURATION_MINS);
        (s, (s + dur) % MINUTES_PER_DAY)
    } else {
        time_explicit = false;
        let (h, m) = period.map(PartOfDay::default_start).unwrap_or(FALLBACK_START);
        let s = (h * 60 + m) as i64;
        let dur = scan.duration_mins.unwrap_or(DEFAULT_DURATION_MINS);
        (s, (s + dur) % MINUTES_PER_DAY)
    };

    let (start_min, end_min) = enforce_order(start_min, end_min);
    TemporalSpan {
        date,
        start: time_of(start_min),
        end: time_of(end_min),
        date_explicit,
        time_explicit,
    }
}

// --- SHARED HELPERS ---

fn time_of(minutes: i64) -> NaiveTime {
    NaiveTime::from_hms_opt((minutes / 60) as u32, (minutes % 60) as u32, 0).unwrap_or_default()
}

fn upcoming_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let mut d = from + Duration::days(1);
    while d.weekday() != target {
        d += Duration::days(1);
    }
    d
}

fn absolute_date(spec: (Option<i32>, u32, u32), today: NaiveDate) -> Option<NaiveDate> {
    let (year, month, day) = spec;
    match year {
        // An explicit year is honored even when it lies in the past.
        Some(y) => NaiveDate::from_ymd_opt(y, month, day),
        None => {
            let d = NaiveDate::from_ymd_opt(today.year(), month, day)?;
            if d < today {
                // Prefer dates from the future.
                NaiveDate::from_ymd_opt(today.year() + 1, month, day)
            } else {
                Some(d)
            }
        }
    }
}

fn inherit_meridiem(mut a: RawClock, mut b: RawClock) -> (RawClock, RawClock) {
    // A marker on one endpoint of a range applies to both.
    if a.meridiem.is_none() {
        a.meridiem = b.meridiem;
    } else if b.meridiem.is_none() {
        b.meridiem = a.meridiem;
    }
    (a, b)
}

fn clock_minutes(c: RawClock, period: Option<PartOfDay>) -> i64 {
    let mut h = match c.meridiem {
        Some(Meridiem::Pm) if c.hour < 12 => c.hour + 12,
        Some(Meridiem::Am) if c.hour == 12 => 0,
        _ => c.hour,
    };
    // Period adjustment applies only to times written without an explicit
    // am/pm marker (Chinese clock times never carry one inline).
    if c.meridiem.is_none()
        && let Some(p) = period
    {
        if p.is_pm() && h < 12 {
            h += 12;
        } else if p == PartOfDay::Morning && h > 12 {
            h -= 12;
        }
    }
    (h.min(23) * 60 + c.minute.min(59)) as i64
}

/// Guarantees `end > start` within the same wall-clock day. An inverted
/// range gets 12 hours added to the end (AM/PM confusion correction, never
/// a day rollover); if that still cannot be ordered, the end collapses to
/// one default duration past the start, capped at 23:59.
fn enforce_order(start: i64, end: i64) -> (i64, i64) {
    let mut e = end;
    if e <= start {
        e += 720;
    }
    if e >= MINUTES_PER_DAY || e <= start {
        e = (start + DEFAULT_DURATION_MINS).min(MINUTES_PER_DAY - 1);
    }
    let s = if e <= start { e - 1 } else { start };
    (s, e)
}

// --- ENGLISH SCAN ---

fn meridiem_word(s: &str) -> Option<Meridiem> {
    match s {
        "am" => Some(Meridiem::Am),
        "pm" => Some(Meridiem::Pm),
        _ => None,
    }
}

/// Parses "H:MM", "H:MMam", "Ham"; a bare hour is only a clock when it
/// carries an attached marker (separate markers and range context are the
/// caller's job).
fn clock_from_str(s: &str) -> Option<RawClock> {
    let (body, meridiem) = if let Some(b) = s.strip_suffix("am") {
        (b, Some(Meridiem::Am))
    } else if let Some(b) = s.strip_suffix("pm") {
        (b, Some(Meridiem::Pm))
    } else {
        (s, None)
    };
    let body = body.trim();
    if let Some((h_str, m_str)) = body.split_once(':') {
        let h: u32 = h_str.parse().ok()?;
        let m: u32 = m_str.parse().ok()?;
        if m > 59 || m_str.len() != 2 {
            return None;
        }
        let valid_hour = if meridiem.is_some() { (1..=12).contains(&h) } else { h <= 23 };
        return valid_hour.then(|| RawClock::new(h, m, meridiem));
    }
    if meridiem.is_some() {
        let h: u32 = body.parse().ok()?;
        return (1..=12).contains(&h).then(|| RawClock::new(h, 0, meridiem));
    }
    None
}

fn bare_hour(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().filter(|h| *h <= 23)
}

fn parse_day_number(s: &str) -> Option<u32> {
    let body = s
        .strip_suffix("st")
        .or_else(|| s.strip_suffix("nd"))
        .or_else(|| s.strip_suffix("rd"))
        .or_else(|| s.strip_suffix("th"))
        .unwrap_or(s);
    body.parse::<u32>().ok().filter(|d| (1..=31).contains(d))
}

/// "YYYY-MM-DD", "M/D" and "M/D/YYYY" (two-digit years are 2000-based).
fn parse_numeric_date(tok: &str) -> Option<(Option<i32>, u32, u32)> {
    if let Ok(d) = NaiveDate::parse_from_str(tok, "%Y-%m-%d") {
        return Some((Some(d.year()), d.month(), d.day()));
    }
    let parts: Vec<&str> = tok.split('/').collect();
    if !(2..=3).contains(&parts.len()) || parts.iter().any(|p| p.is_empty()) {
        return None;
    }
    let month: u32 = parts[0].parse().ok()?;
    let day: u32 = parts[1].parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    let year = match parts.get(2) {
        Some(y_str) => {
            let y: i32 = y_str.parse().ok()?;
            Some(if y < 100 { 2000 + y } else { y })
        }
        None => None,
    };
    Some((year, month, day))
}

fn mark_phrase(tokens: &[String], drop: &mut [bool], phrase: &str) {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.is_empty() || words.len() > tokens.len() {
        return;
    }
    for i in 0..=(tokens.len() - words.len()) {
        if words.iter().enumerate().all(|(k, w)| tokens[i + k] == *w) {
            for k in 0..words.len() {
                drop[i + k] = true;
            }
        }
    }
}

pub(crate) fn scan_en(lower: &str, tokens: &[String]) -> Scan {
    let mut scan = Scan::default();
    let mut drop = vec![false; tokens.len()];

    // Relative-day phrases can span several tokens; match on the joined
    // string, longest keyword first.
    for (kw, offset, pod) in lexicon::EN.relative_days {
        if lexicon::contains_phrase(lower, kw) {
            if scan.relative_days.is_none() {
                scan.relative_days = Some((*offset, *pod));
            }
            mark_phrase(tokens, &mut drop, kw);
        }
    }

    let mut i = 0;
    while i < tokens.len() {
        let tok = tokens[i].as_str();

        // "next friday" / "next week"
        if tok == "next" && i + 1 < tokens.len() {
            if let Some(wd) = lexicon::weekday_from_word(&tokens[i + 1]) {
                if scan.next_weekday.is_none() {
                    scan.next_weekday = Some(wd);
                }
                drop[i] = true;
                drop[i + 1] = true;
                i += 2;
                continue;
            }
            if tokens[i + 1] == "week" {
                scan.next_week = true;
                drop[i] = true;
                drop[i + 1] = true;
                i += 2;
                continue;
            }
        }

        if let Some(wd) = lexicon::weekday_from_word(tok) {
            if scan.weekday.is_none() {
                scan.weekday = Some(wd);
            }
            drop[i] = true;
            i += 1;
            continue;
        }

        // "january 15"
        if let Some(month) = lexicon::month_from_word(tok)
            && i + 1 < tokens.len()
            && let Some(day) = parse_day_number(&tokens[i + 1])
        {
            if scan.absolute.is_none() {
                scan.absolute = Some((None, month, day));
            }
            drop[i] = true;
            drop[i + 1] = true;
            i += 2;
            continue;
        }

        if let Some(spec) = parse_numeric_date(tok) {
            if scan.absolute.is_none() {
                scan.absolute = Some(spec);
            }
            drop[i] = true;
            i += 1;
            continue;
        }

        if tok == "noon" {
            scan.clocks.push(RawClock::new(12, 0, Some(Meridiem::Pm)));
            drop[i] = true;
            i += 1;
            continue;
        }
        if tok == "midnight" {
            scan.clocks.push(RawClock::new(12, 0, Some(Meridiem::Am)));
            drop[i] = true;
            i += 1;
            continue;
        }

        // Hyphenated range in one token: "10-11am", "10:00-11:30".
        if let Some((left, right)) = tok.split_once('-')
            && let Some(rc) = clock_from_str(right)
                .or_else(|| bare_hour(right).map(|h| RawClock::new(h, 0, None)))
            && let Some(lc) = clock_from_str(left)
                .or_else(|| bare_hour(left).map(|h| RawClock::new(h, 0, None)))
        {
            scan.clocks.push(lc);
            scan.clocks.push(rc);
            drop[i] = true;
            i += 1;
            continue;
        }

        if let Some(mut clock) = clock_from_str(tok) {
            let mut consumed = 1;
            if clock.meridiem.is_none()
                && i + 1 < tokens.len()
                && let Some(m) = meridiem_word(&tokens[i + 1])
            {
                clock.meridiem = Some(m);
                drop[i + 1] = true;
                consumed = 2;
            }
            scan.clocks.push(clock);
            drop[i] = true;
            i += consumed;
            continue;
        }

        // Durations: "for 2 hours", "two hours and 30 minutes".
        if let Some(n) = numerals::en_number(tok)
            && i + 1 < tokens.len()
        {
            let unit = tokens[i + 1].as_str();
            let hours = HOUR_UNITS.contains(&unit);
            if hours || MINUTE_UNITS.contains(&unit) {
                let mut mins = if hours { n as i64 * 60 } else { n as i64 };
                drop[i] = true;
                drop[i + 1] = true;
                let mut consumed = 2;
                if hours
                    && i + 4 < tokens.len()
                    && tokens[i + 2] == "and"
                    && let Some(extra) = numerals::en_number(&tokens[i + 3])
                    && MINUTE_UNITS.contains(&tokens[i + 4].as_str())
                {
                    mins += extra as i64;
                    for k in 2..=4 {
                        drop[i + k] = true;
                    }
                    consumed = 5;
                }
                if scan.duration_mins.is_none() {
                    scan.duration_mins = Some(mins);
                }
                i += consumed;
                continue;
            }
        }

        // A bare hour counts as a clock only with a following marker token
        // or when it sits next to a range connector.
        if let Some(h) = bare_hour(tok) {
            if i + 1 < tokens.len()
                && let Some(m) = meridiem_word(&tokens[i + 1])
            {
                scan.clocks.push(RawClock::new(h, 0, Some(m)));
                drop[i] = true;
                drop[i + 1] = true;
                i += 2;
                continue;
            }
            let prev_conn = i > 0 && RANGE_CONNECTORS.contains(&tokens[i - 1].as_str());
            let next_conn =
                i + 1 < tokens.len() && RANGE_CONNECTORS.contains(&tokens[i + 1].as_str());
            if prev_conn || next_conn {
                scan.clocks.push(RawClock::new(h, 0, None));
                drop[i] = true;
                i += 1;
                continue;
            }
        }

        if let Some((_, p)) = lexicon::EN.periods.iter().find(|(kw, _)| *kw == tok) {
            if scan.period.is_none() {
                scan.period = Some(*p);
            }
            drop[i] = true;
            i += 1;
            continue;
        }

        i += 1;
    }

    // Connectors riding on a temporal token go with it ("at 10 am",
    // "from 2:00 to 3:00"), as do range connectors between two clocks.
    for i in (0..tokens.len()).rev() {
        let tok = tokens[i].as_str();
        if drop[i] {
            continue;
        }
        if lexicon::TEMPORAL_PREPOSITIONS.contains(&tok)
            && i + 1 < tokens.len()
            && drop[i + 1]
        {
            drop[i] = true;
        } else if RANGE_CONNECTORS.contains(&tok)
            && i > 0
            && i + 1 < tokens.len()
            && drop[i - 1]
            && drop[i + 1]
        {
            drop[i] = true;
        }
    }

    scan.temporal_tokens = drop;
    scan
}

// --- CHINESE SCAN ---

fn starts_with_at(chars: &[char], pos: usize, keyword: &str) -> Option<usize> {
    let kw: Vec<char> = keyword.chars().collect();
    if pos + kw.len() <= chars.len() && chars[pos..pos + kw.len()] == kw[..] {
        Some(kw.len())
    } else {
        None
    }
}

/// A numeral run directly followed by 点/时, with optional 钟 and 半.
/// Returns the consumed length and, when the numeral composes, the clock.
/// Runs the composer does not cover (decades above 20) are consumed but
/// yield no clock: the caller falls through to its documented defaults
/// rather than rescanning the tail of the run into a bogus hour.
fn zh_clock_at(chars: &[char], pos: usize) -> Option<(usize, Option<RawClock>)> {
    let mut j = pos;
    let mut run = String::new();
    while j < chars.len() && (chars[j].is_ascii_digit() || numerals::is_zh_numeral(chars[j])) {
        run.push(chars[j]);
        j += 1;
    }
    if run.is_empty() || j >= chars.len() || !matches!(chars[j], '点' | '时') {
        return None;
    }
    let hour = numerals::zh_number(&run);
    j += 1;
    if j < chars.len() && chars[j] == '钟' {
        j += 1;
    }
    let minute = if j < chars.len() && chars[j] == '半' {
        j += 1;
        30
    } else {
        0
    };
    Some((j - pos, hour.map(|h| RawClock::new(h, minute, None))))
}

/// "N(个)小时" as a duration in minutes.
fn zh_duration_at(chars: &[char], pos: usize) -> Option<(i64, usize)> {
    let mut j = pos;
    let mut run = String::new();
    while j < chars.len() && (chars[j].is_ascii_digit() || numerals::is_zh_numeral(chars[j])) {
        run.push(chars[j]);
        j += 1;
    }
    if run.is_empty() {
        return None;
    }
    if j < chars.len() && chars[j] == '个' {
        j += 1;
    }
    if starts_with_at(chars, j, "小时").is_none() {
        return None;
    }
    j += 2;
    let hours = numerals::zh_number(&run)?;
    Some((hours as i64 * 60, j - pos))
}

pub(crate) fn scan_zh(text: &str) -> Scan {
    let mut scan = Scan::default();

    for (kw, offset, pod) in lexicon::ZH.relative_days {
        if text.contains(kw) {
            scan.relative_days = Some((*offset, *pod));
            break;
        }
    }
    for (kw, p) in lexicon::ZH.periods {
        if text.contains(kw) {
            scan.period = Some(*p);
            break;
        }
    }

    let chars: Vec<char> = text.chars().collect();
    let mut residue = String::new();
    let mut i = 0;
    'outer: while i < chars.len() {
        for (kw, _, _) in lexicon::ZH.relative_days {
            if let Some(len) = starts_with_at(&chars, i, kw) {
                i += len;
                continue 'outer;
            }
        }
        for (kw, _) in lexicon::ZH.periods {
            if let Some(len) = starts_with_at(&chars, i, kw) {
                i += len;
                continue 'outer;
            }
        }
        if let Some((len, clock)) = zh_clock_at(&chars, i) {
            if let Some(c) = clock {
                scan.clocks.push(c);
            }
            i += len;
            continue;
        }
        if let Some((mins, len)) = zh_duration_at(&chars, i) {
            if scan.duration_mins.is_none() {
                scan.duration_mins = Some(mins);
            }
            i += len;
            continue;
        }
        for kw in ZH_CONNECTIVES {
            if let Some(len) = starts_with_at(&chars, i, kw) {
                i += len;
                continue 'outer;
            }
        }
        let c = chars[i];
        if !c.is_ascii_digit() && c != ':' && !c.is_whitespace() && c != '-' {
            residue.push(c);
        }
        i += 1;
    }
    scan.residue = residue;
    scan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(s: &str) -> Option<RawClock> {
        clock_from_str(s)
    }

    #[test]
    fn clock_word_forms() {
        assert_eq!(clock("2:30"), Some(RawClock::new(2, 30, None)));
        assert_eq!(clock("2:30pm"), Some(RawClock::new(2, 30, Some(Meridiem::Pm))));
        assert_eq!(clock("10am"), Some(RawClock::new(10, 0, Some(Meridiem::Am))));
        assert_eq!(clock("14:05"), Some(RawClock::new(14, 5, None)));
        assert_eq!(clock("10"), None);
        assert_eq!(clock("team"), None);
        assert_eq!(clock("25:00"), None);
        assert_eq!(clock("13pm"), None);
    }

    #[test]
    fn twelve_hour_conversion() {
        assert_eq!(clock_minutes(RawClock::new(2, 0, Some(Meridiem::Pm)), None), 14 * 60);
        assert_eq!(clock_minutes(RawClock::new(12, 0, Some(Meridiem::Am)), None), 0);
        assert_eq!(clock_minutes(RawClock::new(12, 0, Some(Meridiem::Pm)), None), 12 * 60);
    }

    #[test]
    fn period_adjustment_skips_marked_times() {
        let p = Some(PartOfDay::Afternoon);
        assert_eq!(clock_minutes(RawClock::new(2, 0, None), p), 14 * 60);
        // An explicit marker wins over the period keyword.
        assert_eq!(clock_minutes(RawClock::new(2, 0, Some(Meridiem::Am)), p), 2 * 60);
        let m = Some(PartOfDay::Morning);
        assert_eq!(clock_minutes(RawClock::new(14, 0, None), m), 2 * 60);
    }

    #[test]
    fn inverted_range_gets_twelve_hours_not_a_day() {
        // 2:00 -> 1:00 becomes 2:00 -> 13:00.
        let (s, e) = enforce_order(120, 60);
        assert_eq!((s, e), (120, 60 + 720));
        // 9:00 -> 8:00 becomes 9:00 -> 20:00.
        let (s, e) = enforce_order(9 * 60, 8 * 60);
        assert_eq!((s, e), (9 * 60, 20 * 60));
    }

    #[test]
    fn unorderable_range_collapses_to_default_duration() {
        // 23:30 start with a wrapped end lands on the 23:59 ceiling.
        let (s, e) = enforce_order(23 * 60 + 30, 30);
        assert_eq!(s, 23 * 60 + 30);
        assert_eq!(e, MINUTES_PER_DAY - 1);
    }

    #[test]
    fn upcoming_weekday_never_lands_on_today() {
        // 2024-05-06 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        assert_eq!(
            upcoming_weekday(monday, Weekday::Mon),
            NaiveDate::from_ymd_opt(2024, 5, 13).unwrap()
        );
        assert_eq!(
            upcoming_weekday(monday, Weekday::Fri),
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
        );
    }

    #[test]
    fn yearless_dates_prefer_the_future() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        assert_eq!(
            absolute_date((None, 2, 14), today),
            NaiveDate::from_ymd_opt(2025, 2, 14)
        );
        assert_eq!(
            absolute_date((None, 8, 1), today),
            NaiveDate::from_ymd_opt(2024, 8, 1)
        );
        // An explicit year is kept even in the past.
        assert_eq!(
            absolute_date((Some(2020), 1, 1), today),
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );
    }

    #[test]
    fn zh_clock_expressions() {
        let chars: Vec<char> = "十点半".chars().collect();
        let (len, c) = zh_clock_at(&chars, 0).unwrap();
        let c = c.unwrap();
        assert_eq!((c.hour, c.minute), (10, 30));
        assert_eq!(len, 3);

        let chars: Vec<char> = "三小时".chars().collect();
        assert!(zh_clock_at(&chars, 0).is_none());
        assert_eq!(zh_duration_at(&chars, 0), Some((180, 3)));

        // Decade gap: 二十一点 is consumed but composes no hour.
        let chars: Vec<char> = "二十一点".chars().collect();
        assert_eq!(zh_clock_at(&chars, 0), Some((4, None)));
    }
}
