use ark_core::Sample;
use chrono::NaiveDate;

pub fn by_key(key: &str) -> Option<Vec<Sample>> {
    match key {
        "CM_HAM_DO_AI1/Temp_value" => Some(build(&[
            ("05:05:03", 21.4),
            ("05:12:41", 21.6),
            ("05:19:58", 21.9),
            ("05:27:10", 22.3),
            ("05:33:45", 22.1),
            ("05:41:02", 22.6),
            ("05:48:37", 22.8),
            ("05:59:59", 23.0),
        ])),
        "CM_HAM_PH_AI1/pH_value" => Some(build(&[
            ("05:59:59", 7.12),
            ("05:05:03", 7.02),
            ("05:27:10", 7.08),
            ("05:12:41", 6.98),
            ("05:41:02", 7.15),
            ("05:19:58", 7.05),
            ("05:48:37", 7.10),
            ("05:33:45", 7.11),
        ])),
        "CM_PID_DO/Process_DO" => Some(build(&[
            ("05:05:03", 6.8),
            ("05:14:22", 6.4),
            ("05:14:22", 6.6),
            ("05:29:01", 7.1),
            ("05:44:30", 7.4),
            ("05:52:19", 7.0),
        ])),
        "CM_PRESSURE/Output" => Some(build(&[
            ("05:05:03", 1.013),
            ("05:20:00", 1.015),
            ("05:35:00", 1.011),
            ("05:50:00", 1.017),
        ])),
        "EMPTY" => Some(Vec::new()),
        "FLAT" => Some(build(&[("05:05:03", 5.0), ("05:10:00", 5.0)])),
        _ => None,
    }
}

fn build(rows: &[(&str, f64)]) -> Vec<Sample> {
    let day = NaiveDate::from_ymd_opt(2023, 4, 19).unwrap();
    rows.iter()
        .map(|&(time, value)| {
            let t = chrono::NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap();
            Sample::new(day.and_time(t), value)
        })
        .collect()
}
