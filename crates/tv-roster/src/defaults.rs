//! Starter content for a fresh store.

/// Task catalog a brand-new store is seeded with.
pub const DEFAULT_TASKS: &[&str] = &[
    // Light & silly
    "Do a 10-second dance to imaginary music",
    "Share your most used emoji and why",
    "Speak only in movie dialogues for 30 seconds",
    "Show the last photo you took (no explanations allowed)",
    "Do your best animal impression",
    "Pretend you're a news anchor and report today's \"breaking news\"",
    "Describe your day using only 3 words",
    "Clap for yourself like you just won an award",
    "Say your name with a dramatic pause and accent",
    "Make a fake product pitch for a common object nearby",
    // Social & wholesome
    "Compliment the person to your left",
    "Thank someone in the room for something small",
    "Share one habit you're proud of",
    "Share one food you'll never get tired of",
    "Recommend a movie or show everyone should watch",
    "Share one thing that made you smile this week",
    "Appreciate yourself out loud (yes, it's allowed)",
    "Tell the group one thing you're grateful for today",
    "Share one fun fact about yourself",
    // Quick thinkers
    "Answer a random question in 5 seconds",
    "Describe your job using only emojis",
    "Explain a complex thing like you're talking to a 5-year-old",
    "Name 3 things you'd take to a deserted island",
    "If you had a superpower for a day, what would it be",
    "Invent a new festival and explain it in one sentence",
    "Rename your job title to something fun",
    "Describe your mood using a weather forecast",
    "Sell your favorite food like it's a startup",
    "Finish the sentence: \"If today was a movie, it would be called...\"",
    // Group interaction
    "Pick someone and swap roles for the next 10 minutes",
    "Choose today's background music for everyone",
    "Decide the next group activity or break",
    "Start a slow clap for the group",
    "Pick the next game mode",
    "Choose a fun rule everyone follows for the next 15 minutes",
    "Pair two people and make them a team name",
    "Nominate the next person to play",
    "Create a group chant (one line only)",
    "End the round with a group cheer",
];

/// The default catalog as owned strings.
pub fn default_tasks() -> Vec<String> {
    DEFAULT_TASKS.iter().map(|s| (*s).to_string()).collect()
}
