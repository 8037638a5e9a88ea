/// Number of classes the classifier scores.
pub const NUM_CLASSES: usize = 10;

/// One signed q7 score per class, index-aligned with the label table.
pub type ClassScores = [i8; NUM_CLASSES];

/// CIFAR-10 class names in model output order.
pub const CIFAR10_LABELS: [&str; NUM_CLASSES] = [
    "Plane", "Car", "Bird", "Cat", "Deer", "Dog", "Frog", "Horse", "Ship", "Truck",
];
