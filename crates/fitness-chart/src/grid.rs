// File: crates/fitness-chart/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Pick a "nice" tick step (1, 2, 2.5 or 5 times a power of ten) giving at most
/// roughly `target` intervals over `[min, max]`.
pub fn nice_step(min: f64, max: f64, target: usize) -> f64 {
    let span = (max - min).abs();
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return 1.0;
    }
    let raw = span / target as f64;
    if !raw.is_normal() {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mult = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|m| *m >= norm)
        .unwrap_or(10.0);
    mult * mag
}

/// Tick positions inside `[min, max]` on multiples of `nice_step`.
/// Ranges too narrow to subdivide in f64 get a single tick at `min`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return vec![min];
    }
    let step = nice_step(min, max, target);
    let first = (min / step).ceil() * step;
    if !(step.is_finite() && step > 0.0 && first.is_finite()) || (max - min) < step * 0.5 {
        return vec![min];
    }
    let eps = step * 1e-9;
    let limit = target.max(1) * 4;
    let mut out = Vec::new();
    for k in 0..=limit {
        let v = first + step * k as f64;
        if v > max + eps { break; }
        out.push(v);
    }
    if out.is_empty() {
        out.push(min);
    }
    out
}

/// Format a tick value with just enough decimals to tell neighbours apart.
pub fn format_tick(v: f64, step: f64) -> String {
    let mut decimals = 0usize;
    let mut scaled = step.abs();
    while decimals < 6 && (scaled - scaled.round()).abs() > 1e-6 * scaled.max(1.0) {
        scaled *= 10.0;
        decimals += 1;
    }
    let s = format!("{:.*}", decimals, v);
    // Avoid rendering "-0" / "-0.00" for values that round to zero.
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}
