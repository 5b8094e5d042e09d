//! Static narrative content.
//!
//! Templates use `{name}` placeholders filled by [`super::fill`]. Shared
//! placeholder names: `{T}`/`{N}` for the transiting/natal body label,
//! `{t}`/`{n}` for the lowercase label, `{sign}` for the sign name.

use crate::aspects::types::AspectKind;
use crate::western::bodies::CelestialBody;
use crate::western::signs::ZodiacSign;
use std::collections::HashMap;

/// One-sentence definition of what a body represents in a chart.
pub fn definition(body: CelestialBody) -> Option<&'static str> {
    let text = match body {
        CelestialBody::Sun => "Your Sun Sign represents your core identity and the \"main character\" energy you radiate.",
        CelestialBody::Moon => "Your Moon Sign represents your emotional inner world and what you need to feel safe.",
        CelestialBody::Ascendant => "Your Rising Sign (Ascendant) is the mask you wear and your first impression on the world.",
        CelestialBody::Mercury => "Mercury governs how you think and communicate, shaping your intellectual style.",
        CelestialBody::Venus => "Venus rules love, beauty, and values, defining how you connect with others.",
        CelestialBody::Mars => "Mars is your engine of action and desire, fueling your drive and ambition.",
        CelestialBody::Jupiter => "Jupiter represents luck and expansion, showing where you find abundance.",
        CelestialBody::Saturn => "Saturn is the taskmaster, representing discipline, lessons, and maturity.",
        CelestialBody::Uranus => "Uranus is the awakener, where you disrupt the status quo and innovate.",
        CelestialBody::Neptune => "Neptune is the dreamer, where you seek spiritual connection and idealism.",
        CelestialBody::Pluto => "Pluto is the transformer, representing deep regeneration and power.",
        CelestialBody::Chiron => "Chiron is the wounded healer, showing your deepest wound and greatest gift.",
        CelestialBody::NorthNode => "The North Node is your destiny, pointing you toward your soul's mission.",
        _ => return None,
    };
    Some(text)
}

/// House sentences for one body, indexed by house - 1.
pub struct HouseTable {
    pub entries: [&'static str; 12],
    /// Used when the house number is outside 1-12. Placeholder: `{house}`.
    pub fallback: &'static str,
}

lazy_static::lazy_static! {
    pub static ref BODY_HOUSE_MEANINGS: HashMap<CelestialBody, HouseTable> = {
        let mut m = HashMap::new();
        m.insert(CelestialBody::Mercury, HouseTable {
            entries: [
                "With Mercury in the 1st House, your intellect is a core part of your identity. You speak your mind immediately and are often defined by your wit.",
                "In the 2nd House, you apply your mind to finances and values. You likely have a knack for planning, budgeting, or thinking about what truly matters to you.",
                "Mercury in its home 3rd House makes you a natural communicator. You learn quickly, speak fluently, and are always connected to the world around you.",
                "In the 4th House, your thoughts turn inward. You think deeply about family, roots, and the past, often discussing these themes with loved ones.",
                "Mercury in the 5th House expresses intellect through creativity. You love word games, storytelling, and flirting with your ideas.",
                "In the 6th House, your mind focuses on details and routines. You are a problem-solver who excels at organizing daily chaos into order.",
                "Mercury in the 7th House seeks intellectual connection in relationships. You need a partner you can talk to, and you negotiate with fairness.",
                "In the 8th House, your mind dives deep. You are fascinated by psychology, secrets, and the hidden truths of existence.",
                "Mercury in the 9th House thinks globally. You love philosophy, travel, and learning about big-picture concepts.",
                "In the 10th House, your communication style defines your career. You speak with authority and are recognized for your ideas.",
                "Mercury in the 11th House connects with groups. You share ideas with friends and think about the future of society.",
                "In the 12th House, your thoughts are intuitive and private. You often understand things without needing words, tapping into the collective unconscious.",
            ],
            fallback: "Mercury resides in your {house} House, influencing how you think in this area of life.",
        });
        m.insert(CelestialBody::Venus, HouseTable {
            entries: [
                "With Venus in the 1st House, you radiate charm. People are naturally drawn to your grace and style.",
                "In the 2nd House, you attract abundance. You value luxury, stability, and beautiful objects that make you feel secure.",
                "Venus in the 3rd House finds beauty in communication. You speak with kindness and love connecting with your local community.",
                "In the 4th House, you make your home a sanctuary. You value harmony in your family life above all else.",
                "Venus in the 5th House loves to be in love! You express affection creatively and enjoy the playful side of romance.",
                "In the 6th House, you find joy in service. You show love by helping others with daily tasks and creating beautiful routines.",
                "Venus in the 7th House is the placement of partnership. You thrive in one-on-one relationships and are a natural harmonizer.",
                "In the 8th House, love is intense and transformative. You seek deep, soul-level bonds rather than superficial connections.",
                "Venus in the 9th House finds love in exploration. You are attracted to people from different cultures or those who expand your mind.",
                "In the 10th House, you are admired publicly. Your charm aids your career, and you are often seen as a diplomatic leader.",
                "Venus in the 11th House loves the group. You find connection through friendships and shared social ideals.",
                "In the 12th House, love is spiritual and boundless. You may have secret romances or a deeply compassionate, self-sacrificing nature.",
            ],
            fallback: "Venus resides in your {house} House, bringing grace to this area of life.",
        });
        m.insert(CelestialBody::Mars, HouseTable {
            entries: [
                "Mars in the 1st House gives you immense vitality. You approach life head-on and are known for your courage and directness.",
                "In the 2nd House, you fight for your security. You work hard for your money and are fiercely protective of your possessions.",
                "Mars in the 3rd House communicates with passion. You debate vigorously and act on your ideas immediately.",
                "In the 4th House, your energy is focused on the home. You may be the protector of your family, though things can get heated emotionally.",
                "Mars in the 5th House plays hard! You pursue romance and creativity with intense passion and a competitive spirit.",
                "In the 6th House, you work tirelessly. You have great energy for daily tasks but need to watch out for burnout.",
                "Mars in the 7th House brings passion to partnerships. You may attract fiery partners or enjoy a dynamic, active relationship.",
                "In the 8th House, your desires are deep and intense. You navigate transformation and shared resources with powerful focus.",
                "Mars in the 9th House fights for beliefs. You are an adventurer who actively pursues wisdom and new experiences.",
                "In the 10th House, you are ambitious. You conquer your career goals with strategic action and drive.",
                "Mars in the 11th House acts for the group. You are a leader in your community, rallying friends toward a common cause.",
                "In the 12th House, your actions are subtle. You fight for the underdog or work effectively behind the scenes.",
            ],
            fallback: "Mars resides in your {house} House, driving action in this area of life.",
        });
        m
    };
}

/// House sentences for bodies without a dedicated table.
pub const GENERIC_HOUSE_MEANINGS: HouseTable = HouseTable {
    entries: [
        "Residing in your 1st House, this energy is front-and-center in your personality. It's the vibe you walk into a room with.",
        "Located in the 2nd House, this placement directly influences your values, resources, and sense of self-worth.",
        "Sitting in the 3rd House, this energy expresses itself through communication, learning, and local connections.",
        "Found in the 4th House, this is a private energy tied to your home, roots, and emotional foundation.",
        "In the 5th House of joy, this energy wants to play! It influences your creativity, romance, and self-expression.",
        "Positioned in the 6th House, this shapes your daily grind, health routines, and service to others.",
        "Residing in the 7th House, this energy shows up in your partnerships. You often seek this quality in others.",
        "Deep in the 8th House, this is about transformation, intimacy, and shared resources.",
        "In the 9th House of expansion, this energy drives you to explore philosophy, travel, and higher wisdom.",
        "High in the 10th House, this is your public legacy. It influences your career reputation and authority.",
        "Located in the 11th House, this energy connects you to the collective, friendships, and future hopes.",
        "Hidden in the 12th House, this energy is subconscious and spiritual, driving your intuition from the shadows.",
    ],
    fallback: "This placement resides in your {house} house.",
};

/// Attribute record rendered into the sign-analysis templates.
#[derive(Debug, Clone, Copy)]
pub struct SignTraits {
    pub adjective: &'static str,
    pub superpower: &'static str,
    pub shadow: &'static str,
    pub vibe: &'static str,
}

lazy_static::lazy_static! {
    pub static ref SIGN_TRAITS: HashMap<ZodiacSign, SignTraits> = {
        let mut m = HashMap::new();
        m.insert(ZodiacSign::Aries, SignTraits { adjective: "bold, independent, and fiery", superpower: "Courage and initiative", shadow: "Impatience and impulsiveness", vibe: "Direct and action-oriented" });
        m.insert(ZodiacSign::Taurus, SignTraits { adjective: "grounded, sensual, and steady", superpower: "Unshakable perseverance", shadow: "Stubbornness and resistance to change", vibe: "Peaceful and enduring" });
        m.insert(ZodiacSign::Gemini, SignTraits { adjective: "curious, adaptable, and quick-witted", superpower: "Versatility and communication", shadow: "Restlessness and inconsistency", vibe: "Intellectual and social" });
        m.insert(ZodiacSign::Cancer, SignTraits { adjective: "nurturing, sensitive, and protective", superpower: "Emotional intelligence and intuition", shadow: "Moodiness and over-defensiveness", vibe: "Gentle and caring" });
        m.insert(ZodiacSign::Leo, SignTraits { adjective: "charismatic, creative, and radiant", superpower: "Leadership and warmth", shadow: "Ego and seeking validation", vibe: "Bold and expressive" });
        m.insert(ZodiacSign::Virgo, SignTraits { adjective: "analytical, practical, and helpful", superpower: "Attention to detail and efficiency", shadow: "Perfectionism and criticism", vibe: "Organized and observant" });
        m.insert(ZodiacSign::Libra, SignTraits { adjective: "diplomatic, charming, and fair", superpower: "Creating harmony and connection", shadow: "Indecisiveness and people-pleasing", vibe: "Balanced and aesthetic" });
        m.insert(ZodiacSign::Scorpio, SignTraits { adjective: "intense, magnetic, and transformative", superpower: "Depth and psychological insight", shadow: "Jealousy and secrecy", vibe: "Deep and powerful" });
        m.insert(ZodiacSign::Sagittarius, SignTraits { adjective: "adventurous, optimistic, and philosophical", superpower: "Vision and enthusiasm", shadow: "Bluntness and unreliability", vibe: "Free-spirited and expansive" });
        m.insert(ZodiacSign::Capricorn, SignTraits { adjective: "ambitious, disciplined, and strategic", superpower: "Resilience and long-term planning", shadow: "Pessimism and rigidity", vibe: "Serious and determined" });
        m.insert(ZodiacSign::Aquarius, SignTraits { adjective: "innovative, independent, and humanitarian", superpower: "Originality and vision", shadow: "Detachment and rebellion", vibe: "Unique and forward-thinking" });
        m.insert(ZodiacSign::Pisces, SignTraits { adjective: "dreamy, empathetic, and artistic", superpower: "Compassion and imagination", shadow: "Escapism and lack of boundaries", vibe: "Mystical and fluid" });
        m
    };
}

/// Sign-analysis template for a body.
///
/// Placeholders: `{sign}`, `{adj}`, `{Superpower}`, `{Shadow}` (as written in
/// the trait record) and `{vibe}`, `{superpower}`, `{shadow}` (lowercased).
pub fn sign_template(body: CelestialBody) -> &'static str {
    match body {
        CelestialBody::Sun => "**What it means:** In {sign}, this means you are {adj}. A {sign} Sun is motivated by {vibe} energy. You seek to express yourself authentically through these qualities.\n**Your Superpower:** {Superpower}.\n**The Shadow:** {Shadow}.",
        CelestialBody::Moon => "**What it means:** In {sign}, your heart processes life through a {adj} lens.\n**The Vibe:** You find emotional security when things are {vibe}.\n**Strengths:** {Superpower} applied to your relationships and inner self.\n**Challenges:** {Shadow}.",
        CelestialBody::Ascendant => "**What it means:** In {sign}, you greet life with a {adj} attitude.\n**First Impressions:** People likely see you as {vibe}.\n**How You Navigate:** You approach new situations with {superpower}.",
        CelestialBody::Mercury => "**What it means:** In {sign}, your mind is {adj}. You communicate with {superpower}, but you might struggle with {shadow}. You learn best when the subject is {vibe}.",
        CelestialBody::Venus => "**What it means:** In {sign}, your love language is {adj}. You attract others through your {superpower}. In relationships, you value a vibe that is {vibe}.",
        CelestialBody::Mars => "**What it means:** In {sign}, you take action in a {adj} way. Your drive is fueled by {vibe} energy. You fight for what you want with {superpower}.",
        CelestialBody::Jupiter => "**What it means:** In {sign}, your luck expands when you embody {vibe} energy. You find abundance through {superpower}.",
        CelestialBody::Saturn => "**What it means:** In {sign}, your life lessons revolve around being {adj}. You are mastering the art of {superpower} through discipline and patience.",
        CelestialBody::Uranus => "**What it means:** In {sign}, you revolutionize things by being {adj}. Your genius lies in your {superpower}.",
        CelestialBody::Neptune => "**What it means:** In {sign}, your dreams are shaped by {vibe} energy. You seek spiritual connection through {superpower}.",
        CelestialBody::Pluto => "**What it means:** In {sign}, your power comes from being {adj}. You transform yourself by facing {shadow} and embracing {superpower}.",
        CelestialBody::Chiron => "**What it means:** In {sign}, your healing journey involves overcoming {shadow}. You help others by sharing your {superpower}.",
        CelestialBody::NorthNode => "**What it means:** In {sign}, your destiny asks you to become more {adj}. Step away from {shadow} and move toward {superpower}.",
        _ => "**What it means:** In {sign}, this energy expresses itself as {adj}. You find power through {vibe} means.",
    }
}

/// Short theme per house, indexed by house - 1.
pub const HOUSE_THEMES: [&str; 12] = [
    "Self", "Money", "Chat", "Home",
    "Fun", "Routine", "Relationships", "Deep Stuff",
    "Adventure", "Career", "Friends", "Dreams",
];

/// Theme used when a house is unknown.
pub const UNKNOWN_HOUSE_THEME: &str = "Life";

/// Short description of a body, used in the happening paragraph.
pub fn key_trait(body: CelestialBody) -> Option<&'static str> {
    let text = match body {
        CelestialBody::Sun => "your core identity",
        CelestialBody::Moon => "your emotional world",
        CelestialBody::Mercury => "your mental processing",
        CelestialBody::Venus => "your heart and values",
        CelestialBody::Mars => "your warrior spirit",
        CelestialBody::Jupiter => "your luck and optimism",
        CelestialBody::Saturn => "your sense of duty",
        CelestialBody::Uranus => "your rebellious side",
        CelestialBody::Neptune => "your intuition and dreams",
        CelestialBody::Pluto => "your transformative power",
        CelestialBody::Chiron => "your deep healing",
        CelestialBody::NorthNode => "your destiny",
        CelestialBody::SouthNode => "your past",
        CelestialBody::Ascendant => "your outer persona",
        CelestialBody::Midheaven => "your career path",
        _ => return None,
    };
    Some(text)
}

/// Longer description of a body, used in the focus paragraph.
pub fn focus_trait(body: CelestialBody) -> Option<&'static str> {
    let text = match body {
        CelestialBody::Sun => "your core identity and ego",
        CelestialBody::Moon => "your deep emotional world and intuition",
        CelestialBody::Mercury => "the way you think and communicate",
        CelestialBody::Venus => "your values, love life, and wallet",
        CelestialBody::Mars => "your drive, ambition, and inner fire",
        CelestialBody::Jupiter => "your luck, growth, and sense of adventure",
        CelestialBody::Saturn => "your discipline, boundaries, and hard lessons",
        CelestialBody::Uranus => "your urge for freedom and rebellion",
        CelestialBody::Neptune => "your dreams, illusions, and spiritual side",
        CelestialBody::Pluto => "your power, transformation, and shadow self",
        CelestialBody::Chiron => "your deepest wounds and healing power",
        CelestialBody::NorthNode => "your destiny and future path",
        CelestialBody::SouthNode => "your past habits and comfort zone",
        CelestialBody::Ascendant => "the mask you wear and how people see you",
        CelestialBody::Midheaven => "your public reputation and career path",
        _ => return None,
    };
    Some(text)
}

pub const FOCUS_FALLBACK_TRANSITING: &str = "planetary energy";
pub const FOCUS_FALLBACK_NATAL: &str = "part of yourself";

/// Placeholders: `{T}`, `{N}`, `{t}`, `{n}`, `{t_trait}`, `{n_trait}`.
pub const FOCUS_TEMPLATES: [&str; 15] = [
    "This transit isn't just random energy. It's specifically highlighting the link between {t_trait} ({T}) and {n_trait} ({N}). When these two forces meet, you get a chance to realign your inner compass. Think of it as your {t} trying to teach your {n} a valuable lesson. Listen closely.",
    "Where {T} meets {N}: This is a conversation between {t_trait} and {n_trait}. It's asking you to integrate these two parts of your life. Instead of keeping them separate, see how your {t} energy can actually support your {n} needs.",
    "Focus on the bridge between {t_trait} and {n_trait}. Your {t} is shining a spotlight on your {n}, revealing things you usually ignore. Use this clarity to adjust your course.",
    "A rare alignment of {T} ({t_trait}) and {N} ({n_trait}). The universe is asking you to balance these energies. Are you leaning too much into one? Try to find the sweet spot in the middle.",
    "Right now, the Universe is pointing a massive spotlight at how your {t_trait} interacts with your {n_trait}. It's a moment of truth. Are these two working together, or is one sabotaging the other?",
    "Alchemy in action: Mixing the essence of {T} with {N}. This combination creates a unique frequency that can help you break through old blocks. Don't resist the mixture.",
    "Ask yourself: How does my {t_trait} currently affect my {n_trait}? That is the core question of this transit. The answer holds the key to your next breakthrough.",
    "Your {t} is acting as a mentor to your {n} right now. The lesson? How to integrate {t_trait} without losing your connection to {n_trait}. It's a delicate balance, but you can master it.",
    "This aspect acts like a mirror. It reflects how your {t_trait} is shaping your reality, specifically regarding {n_trait}. If you don't like what you see, now is the perfect time to change the angle.",
    "Think of {T} as the fuel and {N} as the engine. This transit is about checking your levels. Are you running on empty, or are you flooding the engine? Adjust the flow of your {t_trait}.",
    "Every transit tells a story. This chapter is about {T} and {N}. It's a narrative about reconciling your need for {t_trait} with the reality of your {n_trait}. You get to write the ending.",
    "A subtle but powerful shift is happening between your {t} and {n}. You might not feel it instantly, but your {t_trait} is slowly rewriting the code of your {n_trait}. Trust the process.",
    "You are being invited to explore the synergy between {T} and {N}. It's not often these two align this way. Use this time to understand how your {t_trait} influences your {n_trait}.",
    "Cosmic check-in: How is your {n} doing? Is it feeling supported by your {t}? This transit brings your awareness to the relationship between {n_trait} and {t_trait}.",
    "This energy unlocks a door between {T} and {N}. Behind it lies a deeper understanding of your {t_trait}. Walk through it.",
];

/// Placeholders: `{T}`, `{N}`.
pub const SUMMARY_CHALLENGING: [&str; 10] = [
    "Name a more iconic duo than {T} and {N}... I'll wait. (Actually, don't, they're fighting).",
    "Heads up: {T} is currently roasting your {N} in the group chat.",
    "Plot twist: {T} is throwing some shade at your {N} today.",
    "Okay, deep breath. {T} and {N} are having a \"discussion.\"",
    "It's giving drama: {T} vs. {N}.",
    "POV: {T} trying to explain something to {N} and it's not going well.",
    "Warning: {T} energy is colliding with {N}. Brace for impact.",
    "Current mood: {T} rolling its eyes at {N}.",
    "The universe really said \"let's mess with {N}\" by sending {T}.",
    "Spicy energy detected between {T} and {N}.",
];

pub const SUMMARY_HARMONIOUS: [&str; 10] = [
    "You're doing great, sweetie! {T} is hyping up your {N}.",
    "{T} and {N} just became besties. We love to see it.",
    "The vibe between {T} and {N}? Immaculate. Chef's kiss.",
    "Green light from the universe! {T} is boosting your {N}.",
    "Iconic behavior: {T} is supporting your {N} right now.",
    "Power couple alert: {T} and {N} are unstoppable today.",
    "We love a supportive king/queen: {T} is lifting up your {N}.",
    "Main character energy: {T} and {N} are aligned.",
    "Just good vibes between {T} and {N}. Enjoy it.",
    "Cosmic high-five between {T} and {N}!",
];

/// Placeholders: `{T}`, `{N}`, `{t}`, `{n}`, `{t_desc}`, `{n_desc}`.
pub const HAPPENING_CHALLENGING: [&str; 6] = [
    "So here's the tea: {T} is kind of crashing your {N}'s party right now. It might feel like you're trying to push forward with {t_desc} only to hit a wall set up by {n_desc}. It's annoying, yes, but it's happening for a reason. The universe is basically shouting \"Pause and reflect!\"",
    "The energy is a bit spicy today. {T} is squaring off against {N}, which basically means {t_desc} and {n_desc} are having a miscommunication. You might feel torn between two directions. Don't force a resolution immediately; sometimes you just have to sit in the tension.",
    "Okay, real talk? {T} is challenging your {N} hard. You might feel like {t_desc} is undermining {n_desc}. Instead of fighting it, ask yourself what this friction is trying to show you. Usually, it's pointing out a boundary that needs to be stronger.",
    "Imagine {T} and {N} are stuck in an elevator together. That's the vibe. It's awkward and tense, but they have to work it out. You might feel a clash between {t_desc} and {n_desc}. Use this pressure to figure out what really matters to you.",
    "It's a bit of a cosmic tug-of-war today. On one side, you have {t_desc}, and on the other, {n_desc}. Neither wants to budge. Instead of picking a side and exhausting yourself, try to find a compromise. What would the middle ground look like?",
    "Resistance is the theme. Your {t} wants one thing, your {n} wants another. It manifests as a friction between {t_desc} and {n_desc}. Don't panic, this is just growing pains. Growth is rarely comfortable, but it's always worth it.",
];

pub const HAPPENING_HARMONIOUS: [&str; 6] = [
    "We rarely get cosmic permission slips this clear, but today is one of them. {T} and {N} are perfectly aligned. Your {t_desc} is seamlessly powering up {n_desc}, so whatever you've been hesitating to do? Do it now. The wind is at your back.",
    "It's a \"yes\" day. {T} is flowing effortlessly into your {N}, creating a bridge between {t_desc} and {n_desc}. Things that usually feel hard might feel surprisingly easy. Lean into this energy. It's like the universe set your mental GPS to \"no traffic.\"",
    "Bestie status confirmed: {T} is totally supporting your {N} right now. This is a golden moment where {t_desc} helps expand and uplift {n_desc}. If you've been waiting for a sign to launch something or say something, this is it.",
    "Everything is clicking. The connection between {T} and {N} is wide open, allowing a free flow of energy between {t_desc} and {n_desc}. You might find that solutions appear before you even fully formulate the problem. Trust your instincts.",
    "It's smooth sailing. The universe has cleared a path for your {n_desc} using the power of {t_desc}. If you've been pushing a boulder uphill, today it starts rolling down the other side. Enjoy the momentum.",
    "Harmony is the word of the day. {T} and {N} are singing in perfect tune. This enhances the link between {t_desc} and {n_desc}, making you feel integrated and whole. Use this stability to build something lasting.",
];

pub const ACTION_DOS_CHALLENGING: [&str; 5] = [
    "Count to ten before reacting. Pause.",
    "Slow down. Speed is the enemy right now.",
    "Check the facts before you spiral.",
    "Set a boundary, but do it kindly.",
    "Wait 24 hours before making a big decision.",
];

pub const ACTION_DONTS_CHALLENGING: [&str; 5] = [
    "Send that text you drafted at 2 AM.",
    "Assume everyone is out to get you.",
    "Force a solution. Let it simmer.",
    "Say yes just to please someone else.",
    "Start a fight just to feel something.",
];

pub const ACTION_DOS_HARMONIOUS: [&str; 5] = [
    "Say yes to the invite (or the idea).",
    "Launch it. Post it. Send it.",
    "Trust your gut. It's right today.",
    "Reach out to someone you admire.",
    "Take the risk. The net will appear.",
];

pub const ACTION_DONTS_HARMONIOUS: [&str; 5] = [
    "Second-guess your magic.",
    "Play small just to make others comfortable.",
    "Wait for permission.",
    "Overallocate your time.",
    "Ignore the signs. They are everywhere.",
];

/// Used when the transiting body has no self-care list.
pub const SELF_CARE_FALLBACK: [&str; 1] = ["Drink water and take three deep breaths."];

lazy_static::lazy_static! {
    pub static ref SELF_CARE_TIPS: HashMap<CelestialBody, [&'static str; 3]> = {
        let mut m = HashMap::new();
        m.insert(CelestialBody::Sun, [
            "Step into the light. Take a selfie, wear your favorite outfit, or just bask in the sun for 10 mins.",
            "Claim your space. Speak up in a meeting or write down 3 things you love about yourself.",
            "Radiate. Call a friend who makes you feel good.",
        ]);
        m.insert(CelestialBody::Moon, [
            "Honor your feelings. Take a bath, journal, or just nap without guilt.",
            "Nourish yourself. Cook a comfort meal or drink a massive glass of water.",
            "Retreat. Cancel one non-essential plan and stay home.",
        ]);
        m.insert(CelestialBody::Mercury, [
            "Clear your mind. Do a brain dump, turn off notifications, or read a few pages of a book.",
            "Connect. Send that voice note you've been meaning to record.",
            "Organize. Clean your desktop or sort one drawer.",
        ]);
        m.insert(CelestialBody::Venus, [
            "Treat yourself. Buy the latte, put on a face mask, or surround yourself with beauty.",
            "Indulge. Eat something specifically because it tastes good, not because it's healthy.",
            "Beautify. Wear the jewelry you usually save for 'special occasions'.",
        ]);
        m.insert(CelestialBody::Mars, [
            "Burn off the energy. Go for a run, punch a pillow, or do a quick heavy workout.",
            "Take action. Do the one thing you've been procrastinating on for 5 minutes.",
            "Move on. Decide to let go of a grudge.",
        ]);
        m.insert(CelestialBody::Jupiter, [
            "Expand your horizons. Watch a documentary, plan a trip, or just look at the sky.",
            "Be generous. Tip extra or compliment a stranger.",
            "Learn. Read an article about a topic you know nothing about.",
        ]);
        m.insert(CelestialBody::Saturn, [
            "Find ground. Clean one corner of your room, make a list, or stretch.",
            "Commit. Set a timer for 20 minutes and focus on one task.",
            "Respect limits. Say 'no' to something you don't want to do.",
        ]);
        m.insert(CelestialBody::Uranus, [
            "Shake it up. Dance to weird music, change your route home, or wear something bold.",
            "Innovate. Try a new app or a new way of making coffee.",
            "Break free. Delete an app that stresses you out.",
        ]);
        m.insert(CelestialBody::Neptune, [
            "Drift away. Meditate, listen to LoFi beats, or stare at water.",
            "Dream. Write down your dreams from last night.",
            "Create. Doodle, paint, or just listen to music with your eyes closed.",
        ]);
        m.insert(CelestialBody::Pluto, [
            "Purge the old. Throw away 3 things you don't need, or take a deep detoxifying breath.",
            "Transform. Take a shower and imagine washing away the day's stress.",
            "Investigate. Journal about a shadow emotion you're feeling.",
        ]);
        m.insert(CelestialBody::Chiron, [
            "Tend to your wounds. Be extra kind to yourself today, like you would to a child.",
            "Heal. Do a body scan meditation.",
            "Accept. Forgive yourself for one mistake.",
        ]);
        m
    };
}

#[derive(Debug, Clone, Copy)]
pub struct ForecastOptions {
    pub love: [&'static str; 2],
    pub career: [&'static str; 2],
}

#[derive(Debug, Clone, Copy)]
pub struct BodyForecasts {
    pub challenging: ForecastOptions,
    pub harmonious: ForecastOptions,
}

lazy_static::lazy_static! {
    /// Love/career lines keyed by the transiting body. The sun entry is the fallback.
    pub static ref FORECASTS: HashMap<CelestialBody, BodyForecasts> = {
        let mut m = HashMap::new();
        m.insert(CelestialBody::Sun, BodyForecasts {
            challenging: ForecastOptions {
                love: ["Ego clashes are likely. Don't make it about winning.", "You might feel overshadowed. Speak up, but gently."],
                career: ["Authority figures might be testing you. Stand your ground, but be respectful.", "Your professional identity feels challenged. Don't take it personally."],
            },
            harmonious: ForecastOptions {
                love: ["You are radiating confidence, which is magnetic. Flirt away.", "Perfect time to be seen. Go out and shine."],
                career: ["Time to ask for what you want. You are visible.", "Leadership opportunities are opening up. Step into them."],
            },
        });
        m.insert(CelestialBody::Moon, BodyForecasts {
            challenging: ForecastOptions {
                love: ["You're feeling sensitive. Avoid heavy relationship talks today.", "Misunderstandings happen when emotions run high. Pause."],
                career: ["Your mood might affect your work. Try to separate the two.", "Public vulnerability is a risk. Keep it professional today."],
            },
            harmonious: ForecastOptions {
                love: ["Deep connection is easy today. Share your feelings.", "Intimacy is high. A great night for a date in."],
                career: ["Your intuition is sharp. Trust your gut on business decisions.", "You connect well with the public or clients today."],
            },
        });
        m.insert(CelestialBody::Mercury, BodyForecasts {
            challenging: ForecastOptions {
                love: ["Words can hurt. Think twice before texting.", "Miscommunication is almost guaranteed. Verify plans."],
                career: ["Double check your emails. Typos or tone issues are likely.", "Don't sign contracts or schedule big reviews today if you can help it."],
            },
            harmonious: ForecastOptions {
                love: ["Great energy for deep conversations. Profound chats.", "Send that text. It will be received well."],
                career: ["Pitch your idea. Your communication is clear and persuasive.", "Networking is favored. Reach out to that contact."],
            },
        });
        m.insert(CelestialBody::Venus, BodyForecasts {
            challenging: ForecastOptions {
                love: ["Jealousy or values clashes might pop up. Breathe.", "You might feel unappreciated. Don't seek validation externally."],
                career: ["Watch your spending. Retail therapy isn't the solution.", "Diplomacy is needed at work. Smooth over any ruffles."],
            },
            harmonious: ForecastOptions {
                love: ["Romance is in the air. High potential for a meet-cute.", "You are magnetic. Enjoy the attention."],
                career: ["Money flows easily. Ask for a raise or close a sale.", "Creative work is highly favored."],
            },
        });
        m.insert(CelestialBody::Mars, BodyForecasts {
            challenging: ForecastOptions {
                love: ["Passion can turn into anger quickly. Watch your temper.", "Conflict is likely. Pick your battles."],
                career: ["You're driven but might be aggressive. Don't bulldoze colleagues.", "Impatience will cost you. Slow down."],
            },
            harmonious: ForecastOptions {
                love: ["Sparks are flying. The good kind.", "Take the lead in romance. Make the first move."],
                career: ["You are unstoppable. Tackle the hardest task on your list.", "Ambition is high. Go after what you want."],
            },
        });
        m.insert(CelestialBody::Jupiter, BodyForecasts {
            challenging: ForecastOptions {
                love: ["You might promise more than you can deliver.", "Over-indulgence could be an issue. Moderation."],
                career: ["Don't overextend yourself. Validate details before saying yes.", "Optimism is good, but don't ignore risks."],
            },
            harmonious: ForecastOptions {
                love: ["Big, generous love energy. Plan a trip or an adventure.", "Open your heart. Good luck accompanies you."],
                career: ["Growth is happening. Launch the project.", "Luck is on your side. Take a calculated risk."],
            },
        });
        m.insert(CelestialBody::Saturn, BodyForecasts {
            challenging: ForecastOptions {
                love: ["You might feel lonely or blocked. Profound commitment often feels heavy.", "Coldness in relationships. Give it space."],
                career: ["Work feels heavy. Just get through the checklist.", "Delays are likely. Patience is the only way."],
            },
            harmonious: ForecastOptions {
                love: ["Stable, lasting love. Good for making commitments.", "Mature conversations bring you closer."],
                career: ["Your hard work is noticed. Solidified progress.", "Build the foundation. It will last."],
            },
        });
        m.insert(CelestialBody::Uranus, BodyForecasts {
            challenging: ForecastOptions {
                love: ["Unexpected breakups or shakeups. Need for space is high.", "Restlessness. Don't blow it up just because you're bored."],
                career: ["Sudden changes at work. Stay flexible.", "Tech issues or sudden shifts in plans."],
            },
            harmonious: ForecastOptions {
                love: ["Exciting surprises. Try something new on a date.", "You attract unique people today."],
                career: ["Innovation strikes. You have a breakthrough idea.", "Freedom. Break the rules slightly."],
            },
        });
        m.insert(CelestialBody::Neptune, BodyForecasts {
            challenging: ForecastOptions {
                love: ["Rose-colored glasses are on. See people as they are, not as you want them to be.", "Deception or confusion is possible."],
                career: ["Brain fog at work. Double check numbers.", "Don't make concrete decisions. You're missing info."],
            },
            harmonious: ForecastOptions {
                love: ["Soulmate vibes. Highly spiritual connection.", "Romance is dreamy and poetic."],
                career: ["Creativity flows. Great for art or vision work.", "Intuition guides your career path."],
            },
        });
        m.insert(CelestialBody::Pluto, BodyForecasts {
            challenging: ForecastOptions {
                love: ["Power struggles. Don't manipulate or be manipulated.", "Intensity is high. Obsessive thoughts possible."],
                career: ["Office politics might get nasty. Stay out of it.", "Something is ending. Let it go."],
            },
            harmonious: ForecastOptions {
                love: ["Transformative intimacy. Deep bonding.", "Magnetic energy is powerful."],
                career: ["You have power and influence. Use it for good.", "Deep research uncovers a hidden gem."],
            },
        });
        m.insert(CelestialBody::Chiron, BodyForecasts {
            challenging: ForecastOptions {
                love: ["Old wounds might reopen. Be gentle with yourself.", "Insecurity in relationships is triggered."],
                career: ["Imposter syndrome might flare up.", "You might feel criticized. It's not about you."],
            },
            harmonious: ForecastOptions {
                love: ["Healing conversation. You can move past old hurt.", "Vulnerability brings strength."],
                career: ["You can mentor others through their struggles.", "Your unique perspective is valued."],
            },
        });
        m
    };
}

/// Hand-written bundle for a specific transit.
///
/// `impact` placeholders: `{th}`/`{nh}` (house with ordinal suffix) and
/// `{t_theme}`/`{n_theme}`.
#[derive(Debug, Clone, Copy)]
pub struct CuratedTransit {
    pub summary: &'static str,
    pub happening: &'static str,
    pub focus: &'static str,
    pub impact: &'static str,
    pub do_this: &'static str,
    pub dont: &'static str,
    pub self_care: &'static str,
}

lazy_static::lazy_static! {
    pub static ref CURATED_TRANSITS: HashMap<(CelestialBody, AspectKind, CelestialBody), CuratedTransit> = {
        let mut m = HashMap::new();
        m.insert((CelestialBody::Saturn, AspectKind::Square, CelestialBody::Sun), CuratedTransit {
            summary: "The Universe is asking: \"How badly do you want this?\"",
            happening: "Saturn is the strict teacher, and he is testing your Sun (your ego/drive). You might feel blocked or tired, but it is just a test of your grit. Think of this as resistance training for your soul. The heavier the weight, the stronger you get.",
            focus: "This transit highlights the friction between your need for recognition and the cold, hard reality of your responsibilities. It's a reality check, but a useful one.",
            impact: "Saturn in your {th} house is challenging your Sun in the {nh} house. It feels like your {t_theme} is weighing down your {n_theme}.",
            do_this: "Put your head down and work.",
            dont: "Throw a tantrum when things stall.",
            self_care: "Stretch your back and shoulders. You're carrying a lot of weight.",
        });
        m.insert((CelestialBody::Mars, AspectKind::Square, CelestialBody::Saturn), CuratedTransit {
            summary: "Feels like driving with the handbrake on.",
            happening: "Mars wants to GO, but Saturn says STOP. You might feel super frustrated with delays. It is not permanent, it is just annoying. The energy here is bottled up, like a shaken soda can. Instead of exploding, try to channel that pressure into something small and controlled.",
            focus: "A classic clash between your unstoppable drive and an immovable object. Patience isn't just a virtue right now; it's a survival strategy.",
            impact: "Mars in your {th} house is squaring off with Saturn in your {nh} house. Your drive for {t_theme} is hitting a wall in {n_theme}.",
            do_this: "Focus on slow, steady tasks.",
            dont: "Try to force a locked door open.",
            self_care: "Do a high-intensity workout to release the bottled-up rage.",
        });
        m.insert((CelestialBody::Jupiter, AspectKind::Trine, CelestialBody::Sun), CuratedTransit {
            summary: "You're doing great, sweetie! Luck is following you.",
            happening: "Everything just feels easier. You are glowing, people like you, and opportunities are popping up. Soak it up! This is one of those days where you feel like the main character in a movie where everything goes right. Enjoy the montage.",
            focus: "This brings a beautiful alignment between your core self and the principle of expansion. Your confidence is key: if you believe it, it will probably happen.",
            impact: "Jupiter in your {th} house is high-fiving your Sun in the {nh} house. Usually, this expands your {t_theme} and lights up your {n_theme}.",
            do_this: "Launch the website, send the text, buy the ticket.",
            dont: "Waste this sitting on the couch.",
            self_care: "Buy a lottery ticket or treat yourself to something fancy.",
        });
        m.insert((CelestialBody::Mars, AspectKind::Opposition, CelestialBody::Venus), CuratedTransit {
            summary: "Sparks are flying. Good ones or bad ones.",
            happening: "Passion is high! This could mean a steamy date or a stupid argument. The energy is raw, so handle with care.",
            focus: "Passion Management",
            impact: "Mars in your {th} house is staring down Venus in your {nh} house. Tension between {t_theme} and {n_theme}.",
            do_this: "Channel it into art or romance.",
            dont: "Pick a fight just to feel something.",
            self_care: "Dance it out or wear your hottest outfit.",
        });
        m
    };
}

pub const DAILY_INTROS: [&str; 4] = [
    "The universe has a specific vibe today. ",
    "Here is your cosmic forecast. ",
    "The stars are chatting, and here is what they are saying. ",
    "Today's energy is a bit unique. ",
];

pub const DAILY_ADVICE: [&str; 4] = [
    "If a rule feels too tight, maybe it's time to loosen it just a little.",
    "Sometimes the best move is to just breathe and let the chaos happen.",
    "You don't have to have it all figured out today. Really.",
    "Trust your gut. It's smarter than your brain right now.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sign_has_traits() {
        for sign in ZodiacSign::ALL {
            assert!(SIGN_TRAITS.contains_key(&sign), "missing traits for {}", sign);
        }
    }

    #[test]
    fn test_dedicated_house_tables() {
        assert!(BODY_HOUSE_MEANINGS.contains_key(&CelestialBody::Mercury));
        assert!(BODY_HOUSE_MEANINGS.contains_key(&CelestialBody::Venus));
        assert!(BODY_HOUSE_MEANINGS.contains_key(&CelestialBody::Mars));
        assert!(!BODY_HOUSE_MEANINGS.contains_key(&CelestialBody::Jupiter));
    }

    #[test]
    fn test_forecast_fallback_present() {
        assert!(FORECASTS.contains_key(&CelestialBody::Sun));
    }
}
