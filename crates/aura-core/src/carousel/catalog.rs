//! Built-in exercise catalog.

use aura_types::exercise::ExerciseCard;

/// The exercises the app tracks, in carousel order.
pub fn default_catalog() -> Vec<ExerciseCard> {
    vec![
        ExerciseCard::new(
            "squats",
            "Squats",
            "🏋️",
            "Legs",
            "Hips back, chest up, knees tracking over toes. Depth below parallel counts.",
        ),
        ExerciseCard::new(
            "pushups",
            "Push-ups",
            "💪",
            "Chest",
            "Rigid plank from head to heels; lower until the elbows pass 90 degrees.",
        ),
        ExerciseCard::new(
            "crunches",
            "Crunches",
            "🔥",
            "Core",
            "Curl the shoulders off the floor, exhale at the top, keep the neck neutral.",
        ),
        ExerciseCard::new(
            "lateral-raises",
            "Lateral Raises",
            "🦅",
            "Shoulders",
            "Lift to shoulder height with a slight elbow bend; lead with the elbows.",
        ),
        ExerciseCard::new(
            "pullups",
            "Pull-ups",
            "🧗",
            "Back",
            "Start from a dead hang and drive the elbows down until the chin clears the bar.",
        ),
        ExerciseCard::new(
            "lunges",
            "Lunges",
            "🚶",
            "Legs",
            "Step long, drop the back knee toward the floor, push through the front heel.",
        ),
        ExerciseCard::new(
            "planks",
            "Planks",
            "🧱",
            "Core",
            "Elbows under shoulders, glutes squeezed, hold a straight line for time.",
        ),
        ExerciseCard::new(
            "curls",
            "Bicep Curls",
            "🦾",
            "Arms",
            "Pin the elbows to your sides; curl fully and control the lowering phase.",
        ),
        ExerciseCard::new(
            "tricep-dips",
            "Tricep Dips",
            "⬇️",
            "Arms",
            "Hands on the bench edge, lower until the elbows reach 90 degrees, press back up.",
        ),
    ]
}
