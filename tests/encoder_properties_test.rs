use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Utc};
use date_bean_encoder::{DateBean, DateToDateBeanEncoder, EncoderError, ModelEncoder, OverflowPolicy};

fn utc_date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

#[test]
fn test_round_trip_preserves_day() {
    let encoder = DateToDateBeanEncoder::utc();

    for year in [1, 1970, 1999, 2000, 2019, 2024, 9999] {
        for month in 1..=12 {
            for day in [1, 9, 10, 15, 28] {
                let value = Utc.with_ymd_and_hms(year, month, day, 13, 45, 0).unwrap();
                let bean = encoder.encode(Some(&value)).unwrap();
                let decoded = encoder.decode(Some(&bean)).unwrap().unwrap();
                assert_eq!(decoded.date_naive(), value.date_naive(), "bean {}", bean);
            }
        }
    }
}

#[test]
fn test_round_trip_in_fixed_offset() {
    let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    let encoder = DateToDateBeanEncoder::with_time_zone(offset);

    let value = offset.with_ymd_and_hms(2021, 7, 14, 23, 59, 0).unwrap();
    let bean = encoder.encode(Some(&value)).unwrap();
    assert_eq!(bean, DateBean::new("14", "7", "2021"));

    let decoded = encoder.decode(Some(&bean)).unwrap().unwrap();
    assert_eq!(decoded.date_naive(), value.date_naive());
    assert_eq!(decoded.to_rfc3339(), "2021-07-14T00:00:00+05:30");
}

#[test]
fn test_absent_both_directions() {
    let encoder = DateToDateBeanEncoder::utc();
    assert!(encoder.encode(None).is_none());
    assert!(encoder.decode(None).unwrap().is_none());
}

#[test]
fn test_field_mapping_literal() {
    let encoder = DateToDateBeanEncoder::utc();
    assert_eq!(
        encoder.encode(Some(&utc_date(2019, 3, 5))),
        Some(DateBean::new("5", "3", "2019"))
    );
    assert_eq!(
        encoder.decode(Some(&DateBean::new("5", "3", "2019"))).unwrap(),
        Some(utc_date(2019, 3, 5))
    );
}

#[test]
fn test_year_boundary_literal() {
    let encoder = DateToDateBeanEncoder::utc();
    let bean = encoder.encode(Some(&utc_date(2019, 12, 31))).unwrap();
    assert_eq!(bean, DateBean::new("31", "12", "2019"));

    let decoded = encoder.decode(Some(&bean)).unwrap().unwrap();
    assert_eq!(decoded.date_naive(), NaiveDate::from_ymd_opt(2019, 12, 31).unwrap());
    assert_eq!(decoded.month(), 12);
    assert_eq!(decoded.year(), 2019);
}

#[test]
fn test_parse_failure_returns_no_date() {
    let encoder = DateToDateBeanEncoder::utc();
    let result = encoder.decode(Some(&DateBean::new("5", "abc", "2019")));
    assert!(matches!(result, Err(EncoderError::NumberFormat { .. })));
}

#[test]
fn test_each_field_is_parsed() {
    let encoder = DateToDateBeanEncoder::utc();
    for (bean, field) in [
        (DateBean::new("x", "3", "2019"), "day"),
        (DateBean::new("5", "3.0", "2019"), "month"),
        (DateBean::new("5", "3", "2,019"), "year"),
    ] {
        match encoder.decode(Some(&bean)) {
            Err(EncoderError::NumberFormat { field: got, .. }) => assert_eq!(got, field),
            other => panic!("expected NumberFormat on {field}, got {other:?}"),
        }
    }
}

#[test]
fn test_encode_has_no_leading_zeros() {
    let encoder = DateToDateBeanEncoder::utc();
    let bean = encoder.encode(Some(&utc_date(207, 1, 9))).unwrap();
    assert_eq!(bean, DateBean::new("9", "1", "207"));
}

#[test]
fn test_leading_zeros_decode() {
    let encoder = DateToDateBeanEncoder::utc();
    let decoded = encoder
        .decode(Some(&DateBean::new("05", "03", "02019")))
        .unwrap()
        .unwrap();
    assert_eq!(decoded, utc_date(2019, 3, 5));
}

#[test]
fn test_overflow_policies() {
    let bean = DateBean::new("0", "1", "2020");

    let lenient = DateToDateBeanEncoder::utc();
    assert_eq!(lenient.overflow_policy(), OverflowPolicy::Lenient);
    assert_eq!(
        lenient.decode(Some(&bean)).unwrap(),
        Some(utc_date(2019, 12, 31))
    );

    let strict = DateToDateBeanEncoder::utc().with_overflow_policy(OverflowPolicy::Strict);
    assert!(matches!(
        strict.decode(Some(&bean)),
        Err(EncoderError::InvalidDateField { .. })
    ));
}

#[test]
fn test_encoder_is_usable_as_trait_object() {
    let encoders: Vec<Box<dyn ModelEncoder<DateTime<Utc>, DateBean>>> = vec![
        Box::new(DateToDateBeanEncoder::utc()),
        Box::new(DateToDateBeanEncoder::utc().with_overflow_policy(OverflowPolicy::Strict)),
    ];

    for encoder in &encoders {
        let bean = encoder.encode(Some(&utc_date(2024, 2, 29))).unwrap();
        assert_eq!(bean, DateBean::new("29", "2", "2024"));
        assert_eq!(
            encoder.decode(Some(&bean)).unwrap(),
            Some(utc_date(2024, 2, 29))
        );
    }
}

#[test]
fn test_concurrent_use() {
    let encoder = std::sync::Arc::new(DateToDateBeanEncoder::utc());

    let handles: Vec<_> = (1..=12)
        .map(|month| {
            let encoder = encoder.clone();
            std::thread::spawn(move || {
                let value = utc_date(2022, month, 15);
                let bean = encoder.encode(Some(&value)).unwrap();
                encoder.decode(Some(&bean)).unwrap().unwrap() == value
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_early_dates_use_proleptic_calendar() {
    let encoder = DateToDateBeanEncoder::utc();

    // no Julian cutover: 1582-10-10 is an ordinary day
    let value = utc_date(1582, 10, 10);
    let bean = encoder.encode(Some(&value)).unwrap();
    assert_eq!(bean, DateBean::new("10", "10", "1582"));
    assert_eq!(encoder.decode(Some(&bean)).unwrap(), Some(value));

    // no BC era: year 0 and earlier keep their ISO numbering
    assert_eq!(
        encoder.encode(Some(&utc_date(0, 6, 1))),
        Some(DateBean::new("1", "6", "0"))
    );
    let bc = encoder
        .decode(Some(&DateBean::new("1", "6", "-5")))
        .unwrap()
        .unwrap();
    assert_eq!(bc.year(), -5);
    assert_eq!(encoder.encode(Some(&bc)), Some(DateBean::new("1", "6", "-5")));
}
