use flexi_logger::{DeferredNow, style};
use log::{Level, Record};

/// `level: message`, colored by level. Info lines carry no prefix.
pub fn cli_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let level = record.level();
    if level == Level::Info {
        return write!(w, "{}", record.args());
    }
    write!(
        w,
        "{}: {}",
        style(level).paint(level.to_string().to_lowercase()),
        record.args()
    )
}
