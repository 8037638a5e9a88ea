use inference::{CIFAR10_LABELS, ClassScores, NUM_CLASSES, Prediction, top_prediction};

#[test]
fn test_tie_goes_to_first_index() {
    let scores: ClassScores = [5, 5, 3, 0, 0, 0, 0, 0, 0, 0];
    assert_eq!(top_prediction(&scores).index, 0);
}

#[test]
fn test_full_confidence() {
    let scores: ClassScores = [0, -4, 0, 127, -128, 0, 0, -1, 0, 0];
    let prediction = top_prediction(&scores);

    assert_eq!(prediction.index, 3);
    assert_eq!(prediction.score, 127);
    assert_eq!(prediction.confidence_text(), "100.0%");
    assert_eq!(prediction.label(&CIFAR10_LABELS), "Cat");
}

#[test]
fn test_all_zero_picks_first_with_zero_confidence() {
    let prediction = top_prediction(&[0i8; NUM_CLASSES]);

    assert_eq!(prediction.index, 0);
    assert_eq!(prediction.confidence_text(), "0.0%");
    assert_eq!(prediction.label(&CIFAR10_LABELS), "Plane");
}

#[test]
fn test_all_minimum_picks_first() {
    let prediction = top_prediction(&[i8::MIN; NUM_CLASSES]);
    assert_eq!(prediction, Prediction { index: 0, score: -128 });
}

#[test]
fn test_later_maximum_wins() {
    let scores: ClassScores = [-10, -3, -3, -50, -128, -2, -9, -2, -100, -7];
    assert_eq!(top_prediction(&scores).index, 5);
}

#[test]
fn test_confidence_is_not_clamped() {
    let prediction = Prediction { index: 1, score: -127 };
    assert_eq!(prediction.confidence(), -1.0);
    assert_eq!(prediction.confidence_text(), "-100.0%");
}

#[test]
fn test_confidence_rounds_to_one_decimal() {
    // 64 / 127 = 50.39%
    let prediction = Prediction { index: 9, score: 64 };
    assert_eq!(prediction.confidence_text(), "50.4%");
    assert_eq!(prediction.label(&CIFAR10_LABELS), "Truck");
    assert_eq!(format!("{}", prediction), "class 9 (50.4%)");
}

#[test]
fn test_label_out_of_table() {
    let prediction = Prediction { index: 12, score: 1 };
    assert_eq!(prediction.label(&CIFAR10_LABELS), "?");
}
