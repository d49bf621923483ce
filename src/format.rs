use crate::domain::Mode;

const SI_BASE: u64 = 1000;
const SI_PREFIXES: [char; 6] = ['k', 'M', 'G', 'T', 'P', 'E'];

pub fn humanize_bytes(bytes: u64) -> String {
    if bytes < SI_BASE {
        return format!("{bytes} B");
    }

    let mut magnitude = SI_BASE;
    let mut exponent = 0usize;
    let mut rest = bytes / SI_BASE;
    while rest >= SI_BASE {
        magnitude *= SI_BASE;
        exponent += 1;
        rest /= SI_BASE;
    }

    format!(
        "{:.1} {}B",
        bytes as f64 / magnitude as f64,
        SI_PREFIXES[exponent]
    )
}

pub fn permission_string(mode: Mode) -> String {
    const FLAGS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];

    FLAGS
        .iter()
        .map(|(bit, ch)| if mode.bits() & bit != 0 { *ch } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn small_sizes_are_plain_bytes() {
        assert_eq!(humanize_bytes(0), "0 B");
        assert_eq!(humanize_bytes(999), "999 B");
    }

    #[test]
    fn larger_sizes_use_one_decimal_and_si_prefix() {
        assert_eq!(humanize_bytes(1000), "1.0 kB");
        assert_eq!(humanize_bytes(1_536_000), "1.5 MB");
        assert_eq!(humanize_bytes(2_000_000_000), "2.0 GB");
        assert_eq!(humanize_bytes(7_300_000_000_000), "7.3 TB");
    }

    #[test]
    fn largest_u64_fits_in_exabytes() {
        assert_eq!(humanize_bytes(u64::MAX), "18.4 EB");
    }

    #[test]
    fn permission_string_renders_owner_group_other() {
        assert_eq!(permission_string(Mode::from_bits(0o755)), "rwxr-xr-x");
        assert_eq!(permission_string(Mode::from_bits(0o640)), "rw-r-----");
        assert_eq!(permission_string(Mode::from_bits(0)), "---------");
    }
}
