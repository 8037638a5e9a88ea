/// In-place fixed-point softmax over q7 scores.
///
/// Scores more than 8 below the maximum are treated as zero probability.
/// The rest contribute `2^(v - base)` to a sum, and each output is
/// `(2^20 / sum) >> (13 + base - v)` saturated to q7, so a single dominant
/// score comes out as 127.
pub fn softmax_q7(scores: &mut [i8]) {
    if scores.is_empty() {
        return;
    }

    let max = scores.iter().copied().fold(i8::MIN, i8::max) as i32;
    let base = max - 8;

    let sum: i32 = scores
        .iter()
        .map(|&v| v as i32)
        .filter(|&v| v > base)
        .map(|v| 1i32 << (v - base).clamp(0, 31))
        .sum();
    let output_base = 0x10_0000 / sum;

    for v in scores.iter_mut() {
        let value = *v as i32;
        *v = if value > base {
            let shift = (13 + base - value).clamp(0, 31);
            (output_base >> shift).clamp(i8::MIN as i32, i8::MAX as i32) as i8
        } else {
            0
        };
    }
}
