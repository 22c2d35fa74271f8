//! Built-in emoji tables: the shortcode catalog and the picker categories.

/// Catalog entry before it is turned into an owned [`super::EmojiValue`].
#[derive(Debug, Clone, Copy)]
pub(crate) enum Builtin {
    Glyph(&'static str),
    Image {
        src: &'static str,
        alt: &'static str,
    },
}

/// Shortcode table in catalog order. Search results preserve this order.
pub(crate) const SHORTCODES: &[(&str, Builtin)] = &[
    // Custom Image Emojis
    (
        "sadcat",
        Builtin::Image {
            src: "assets/emojis/sadcat.jpg",
            alt: "sad cat",
        },
    ),
    (
        "sadcatthumbsup",
        Builtin::Image {
            src: "assets/emojis/thumbsup_crying_cat.jpg",
            alt: "crying cat thumbs up",
        },
    ),
    // Greetings & Common
    ("hello", Builtin::Glyph("👋")),
    ("hi", Builtin::Glyph("👋")),
    ("wave", Builtin::Glyph("👋")),
    ("bye", Builtin::Glyph("👋")),
    // Emotions - Happy
    ("smile", Builtin::Glyph("😊")),
    ("happy", Builtin::Glyph("😊")),
    ("grin", Builtin::Glyph("😁")),
    ("laugh", Builtin::Glyph("😂")),
    ("joy", Builtin::Glyph("😂")),
    ("lol", Builtin::Glyph("😂")),
    ("rofl", Builtin::Glyph("🤣")),
    ("love", Builtin::Glyph("😍")),
    ("heart", Builtin::Glyph("❤️")),
    ("hearts", Builtin::Glyph("💕")),
    ("kiss", Builtin::Glyph("😘")),
    ("wink", Builtin::Glyph("😉")),
    ("blush", Builtin::Glyph("😊")),
    ("hug", Builtin::Glyph("🤗")),
    ("star", Builtin::Glyph("🤩")),
    // Emotions - Sad/Negative
    ("sad", Builtin::Glyph("😢")),
    ("cry", Builtin::Glyph("😭")),
    ("tears", Builtin::Glyph("😭")),
    ("angry", Builtin::Glyph("😠")),
    ("mad", Builtin::Glyph("😡")),
    ("rage", Builtin::Glyph("😡")),
    ("worried", Builtin::Glyph("😟")),
    ("fear", Builtin::Glyph("😨")),
    ("scared", Builtin::Glyph("😱")),
    ("shock", Builtin::Glyph("😱")),
    ("tired", Builtin::Glyph("😴")),
    ("sleep", Builtin::Glyph("😴")),
    ("sick", Builtin::Glyph("🤢")),
    // Emotions - Neutral/Other
    ("thinking", Builtin::Glyph("🤔")),
    ("think", Builtin::Glyph("🤔")),
    ("hmm", Builtin::Glyph("🤔")),
    ("cool", Builtin::Glyph("😎")),
    ("sunglasses", Builtin::Glyph("😎")),
    ("nerd", Builtin::Glyph("🤓")),
    ("party", Builtin::Glyph("🥳")),
    ("celebrate", Builtin::Glyph("🥳")),
    ("confused", Builtin::Glyph("😕")),
    ("surprised", Builtin::Glyph("😮")),
    ("wow", Builtin::Glyph("😮")),
    // Gestures
    ("thumbsup", Builtin::Glyph("👍")),
    ("thumbup", Builtin::Glyph("👍")),
    ("like", Builtin::Glyph("👍")),
    ("thumbsdown", Builtin::Glyph("👎")),
    ("thumbdown", Builtin::Glyph("👎")),
    ("dislike", Builtin::Glyph("👎")),
    ("ok", Builtin::Glyph("👌")),
    ("okay", Builtin::Glyph("👌")),
    ("clap", Builtin::Glyph("👏")),
    ("applause", Builtin::Glyph("👏")),
    ("pray", Builtin::Glyph("🙏")),
    ("thanks", Builtin::Glyph("🙏")),
    ("please", Builtin::Glyph("🙏")),
    ("muscle", Builtin::Glyph("💪")),
    ("strong", Builtin::Glyph("💪")),
    ("flex", Builtin::Glyph("💪")),
    ("point", Builtin::Glyph("👉")),
    ("victory", Builtin::Glyph("✌️")),
    ("peace", Builtin::Glyph("✌️")),
    ("fist", Builtin::Glyph("✊")),
    ("punch", Builtin::Glyph("👊")),
    // Animals
    ("dog", Builtin::Glyph("🐶")),
    ("cat", Builtin::Glyph("🐱")),
    ("mouse", Builtin::Glyph("🐭")),
    ("rabbit", Builtin::Glyph("🐰")),
    ("bunny", Builtin::Glyph("🐰")),
    ("fox", Builtin::Glyph("🦊")),
    ("bear", Builtin::Glyph("🐻")),
    ("panda", Builtin::Glyph("🐼")),
    ("lion", Builtin::Glyph("🦁")),
    ("tiger", Builtin::Glyph("🐯")),
    ("cow", Builtin::Glyph("🐮")),
    ("pig", Builtin::Glyph("🐷")),
    ("frog", Builtin::Glyph("🐸")),
    ("monkey", Builtin::Glyph("🐵")),
    ("chicken", Builtin::Glyph("🐔")),
    ("bird", Builtin::Glyph("🐦")),
    ("penguin", Builtin::Glyph("🐧")),
    ("duck", Builtin::Glyph("🦆")),
    ("eagle", Builtin::Glyph("🦅")),
    ("owl", Builtin::Glyph("🦉")),
    ("bat", Builtin::Glyph("🦇")),
    ("wolf", Builtin::Glyph("🐺")),
    ("horse", Builtin::Glyph("🐴")),
    ("unicorn", Builtin::Glyph("🦄")),
    ("bee", Builtin::Glyph("🐝")),
    ("bug", Builtin::Glyph("🐛")),
    ("butterfly", Builtin::Glyph("🦋")),
    ("snail", Builtin::Glyph("🐌")),
    ("snake", Builtin::Glyph("🐍")),
    ("turtle", Builtin::Glyph("🐢")),
    ("fish", Builtin::Glyph("🐟")),
    ("octopus", Builtin::Glyph("🐙")),
    // Food & Drink
    ("apple", Builtin::Glyph("🍎")),
    ("banana", Builtin::Glyph("🍌")),
    ("orange", Builtin::Glyph("🍊")),
    ("lemon", Builtin::Glyph("🍋")),
    ("watermelon", Builtin::Glyph("🍉")),
    ("grapes", Builtin::Glyph("🍇")),
    ("strawberry", Builtin::Glyph("🍓")),
    ("peach", Builtin::Glyph("🍑")),
    ("pineapple", Builtin::Glyph("🍍")),
    ("coconut", Builtin::Glyph("🥥")),
    ("tomato", Builtin::Glyph("🍅")),
    ("avocado", Builtin::Glyph("🥑")),
    ("corn", Builtin::Glyph("🌽")),
    ("carrot", Builtin::Glyph("🥕")),
    ("bread", Builtin::Glyph("🍞")),
    ("cheese", Builtin::Glyph("🧀")),
    ("egg", Builtin::Glyph("🥚")),
    ("bacon", Builtin::Glyph("🥓")),
    ("burger", Builtin::Glyph("🍔")),
    ("fries", Builtin::Glyph("🍟")),
    ("pizza", Builtin::Glyph("🍕")),
    ("hotdog", Builtin::Glyph("🌭")),
    ("taco", Builtin::Glyph("🌮")),
    ("burrito", Builtin::Glyph("🌯")),
    ("sushi", Builtin::Glyph("🍣")),
    ("cake", Builtin::Glyph("🍰")),
    ("cookie", Builtin::Glyph("🍪")),
    ("chocolate", Builtin::Glyph("🍫")),
    ("candy", Builtin::Glyph("🍬")),
    ("icecream", Builtin::Glyph("🍦")),
    ("coffee", Builtin::Glyph("☕")),
    ("tea", Builtin::Glyph("🍵")),
    ("beer", Builtin::Glyph("🍺")),
    ("wine", Builtin::Glyph("🍷")),
    ("cocktail", Builtin::Glyph("🍹")),
    // Activities & Sports
    ("soccer", Builtin::Glyph("⚽")),
    ("football", Builtin::Glyph("🏈")),
    ("basketball", Builtin::Glyph("🏀")),
    ("baseball", Builtin::Glyph("⚾")),
    ("tennis", Builtin::Glyph("🎾")),
    ("volleyball", Builtin::Glyph("🏐")),
    ("golf", Builtin::Glyph("⛳")),
    ("bike", Builtin::Glyph("🚴")),
    ("bicycle", Builtin::Glyph("🚲")),
    ("run", Builtin::Glyph("🏃")),
    ("swim", Builtin::Glyph("🏊")),
    ("gym", Builtin::Glyph("🏋️")),
    ("yoga", Builtin::Glyph("🧘")),
    ("dance", Builtin::Glyph("💃")),
    ("music", Builtin::Glyph("🎵")),
    ("guitar", Builtin::Glyph("🎸")),
    ("game", Builtin::Glyph("🎮")),
    ("dice", Builtin::Glyph("🎲")),
    ("trophy", Builtin::Glyph("🏆")),
    ("medal", Builtin::Glyph("🏅")),
    ("win", Builtin::Glyph("🏆")),
    // Travel & Places
    ("car", Builtin::Glyph("🚗")),
    ("taxi", Builtin::Glyph("🚕")),
    ("bus", Builtin::Glyph("🚌")),
    ("train", Builtin::Glyph("🚆")),
    ("plane", Builtin::Glyph("✈️")),
    ("rocket", Builtin::Glyph("🚀")),
    ("ship", Builtin::Glyph("🚢")),
    ("boat", Builtin::Glyph("⛵")),
    ("home", Builtin::Glyph("🏠")),
    ("house", Builtin::Glyph("🏠")),
    ("office", Builtin::Glyph("🏢")),
    ("school", Builtin::Glyph("🏫")),
    ("hospital", Builtin::Glyph("🏥")),
    ("hotel", Builtin::Glyph("🏨")),
    ("beach", Builtin::Glyph("🏖️")),
    ("mountain", Builtin::Glyph("⛰️")),
    ("camping", Builtin::Glyph("🏕️")),
    ("tent", Builtin::Glyph("⛺")),
    // Objects & Tech
    ("phone", Builtin::Glyph("📱")),
    ("computer", Builtin::Glyph("💻")),
    ("laptop", Builtin::Glyph("💻")),
    ("keyboard", Builtin::Glyph("⌨️")),
    ("computermouse", Builtin::Glyph("🖱️")),
    ("camera", Builtin::Glyph("📷")),
    ("video", Builtin::Glyph("📹")),
    ("tv", Builtin::Glyph("📺")),
    ("radio", Builtin::Glyph("📻")),
    ("watch", Builtin::Glyph("⌚")),
    ("clock", Builtin::Glyph("🕐")),
    ("alarm", Builtin::Glyph("⏰")),
    ("battery", Builtin::Glyph("🔋")),
    ("light", Builtin::Glyph("💡")),
    ("bulb", Builtin::Glyph("💡")),
    ("book", Builtin::Glyph("📖")),
    ("pen", Builtin::Glyph("✒️")),
    ("pencil", Builtin::Glyph("✏️")),
    ("mail", Builtin::Glyph("✉️")),
    ("email", Builtin::Glyph("📧")),
    ("gift", Builtin::Glyph("🎁")),
    ("present", Builtin::Glyph("🎁")),
    ("balloon", Builtin::Glyph("🎈")),
    ("money", Builtin::Glyph("💰")),
    ("dollar", Builtin::Glyph("💵")),
    ("credit", Builtin::Glyph("💳")),
    ("key", Builtin::Glyph("🔑")),
    ("lock", Builtin::Glyph("🔒")),
    ("unlock", Builtin::Glyph("🔓")),
    // Weather & Nature
    ("sun", Builtin::Glyph("☀️")),
    ("sunny", Builtin::Glyph("☀️")),
    ("moon", Builtin::Glyph("🌙")),
    ("cloud", Builtin::Glyph("☁️")),
    ("rain", Builtin::Glyph("🌧️")),
    ("rainy", Builtin::Glyph("🌧️")),
    ("snow", Builtin::Glyph("❄️")),
    ("snowy", Builtin::Glyph("❄️")),
    ("thunder", Builtin::Glyph("⚡")),
    ("lightning", Builtin::Glyph("⚡")),
    ("fire", Builtin::Glyph("🔥")),
    ("hot", Builtin::Glyph("🔥")),
    ("water", Builtin::Glyph("💧")),
    ("ocean", Builtin::Glyph("🌊")),
    ("tree", Builtin::Glyph("🌲")),
    ("flower", Builtin::Glyph("🌸")),
    ("rose", Builtin::Glyph("🌹")),
    ("plant", Builtin::Glyph("🌱")),
    ("leaf", Builtin::Glyph("🍃")),
    // Symbols
    ("check", Builtin::Glyph("✅")),
    ("yes", Builtin::Glyph("✅")),
    ("x", Builtin::Glyph("❌")),
    ("no", Builtin::Glyph("❌")),
    ("warning", Builtin::Glyph("⚠️")),
    ("alert", Builtin::Glyph("⚠️")),
    ("question", Builtin::Glyph("❓")),
    ("exclamation", Builtin::Glyph("❗")),
    ("info", Builtin::Glyph("ℹ️")),
    ("plus", Builtin::Glyph("➕")),
    ("minus", Builtin::Glyph("➖")),
    ("arrow", Builtin::Glyph("➡️")),
    ("up", Builtin::Glyph("⬆️")),
    ("down", Builtin::Glyph("⬇️")),
    ("left", Builtin::Glyph("⬅️")),
    ("right", Builtin::Glyph("➡️")),
    ("recycle", Builtin::Glyph("♻️")),
    ("infinity", Builtin::Glyph("♾️")),
    ("copyright", Builtin::Glyph("©️")),
    ("tm", Builtin::Glyph("™️")),
    // Numbers
    ("one", Builtin::Glyph("1️⃣")),
    ("two", Builtin::Glyph("2️⃣")),
    ("three", Builtin::Glyph("3️⃣")),
    ("four", Builtin::Glyph("4️⃣")),
    ("five", Builtin::Glyph("5️⃣")),
    ("six", Builtin::Glyph("6️⃣")),
    ("seven", Builtin::Glyph("7️⃣")),
    ("eight", Builtin::Glyph("8️⃣")),
    ("nine", Builtin::Glyph("9️⃣")),
    ("ten", Builtin::Glyph("🔟")),
    ("hundred", Builtin::Glyph("💯")),
];

pub(crate) const SMILEYS: &[&str] = &[
    "😀", "😃", "😄", "😁", "😆", "😅", "🤣", "😂", "🙂", "🙃",
    "😉", "😊", "😇", "🥰", "😍", "🤩", "😘", "😗", "😚", "😙",
    "🥲", "😋", "😛", "😜", "🤪", "😝", "🤑", "🤗", "🤭", "🤫",
    "🤔", "🤐", "🤨", "😐", "😑", "😶", "😏", "😒", "🙄", "😬",
    "🤥", "😌", "😔", "😪", "🤤", "😴",
];

pub(crate) const EMOTIONS: &[&str] = &[
    "😷", "🤒", "🤕", "🤢", "🤮", "🤧", "🥵", "🥶", "😵", "🤯",
    "🤠", "🥳", "🥸", "😎", "🤓", "🧐", "😕", "😟", "🙁", "☹️",
    "😮", "😯", "😲", "😳", "🥺", "😦", "😧", "😨", "😰", "😥",
    "😢", "😭", "😱", "😖", "😣", "😞", "😓", "😩", "😫", "🥱",
];

pub(crate) const PEOPLE: &[&str] = &[
    "👋", "🤚", "🖐️", "✋", "🖖", "👌", "🤌", "🤏", "✌️", "🤞",
    "🤟", "🤘", "🤙", "👈", "👉", "👆", "🖕", "👇", "☝️", "👍",
    "👎", "✊", "👊", "🤛", "🤜", "👏", "🙌", "👐", "🤲", "🤝",
    "🙏", "✍️", "💪", "🦾", "🦿", "🦵", "🦶", "👂", "🦻", "👃",
    "🧠", "🫀", "🫁", "🦷", "🦴", "👀", "👁️", "👅", "👄",
];

pub(crate) const ANIMALS: &[&str] = &[
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯",
    "🦁", "🐮", "🐷", "🐸", "🐵", "🐔", "🐧", "🐦", "🐤", "🦆",
    "🦅", "🦉", "🦇", "🐺", "🐗", "🐴", "🦄", "🐝", "🐛", "🦋",
    "🐌", "🐞", "🐜", "🦟", "🦗", "🕷️", "🦂", "🐢", "🐍", "🦎",
    "🦖", "🦕", "🐙", "🦑", "🦐", "🦞", "🦀", "🐡", "🐠", "🐟",
];

pub(crate) const FOOD: &[&str] = &[
    "🍎", "🍐", "🍊", "🍋", "🍌", "🍉", "🍇", "🍓", "🫐", "🍈",
    "🍒", "🍑", "🥭", "🍍", "🥥", "🥝", "🍅", "🍆", "🥑", "🥦",
    "🥬", "🥒", "🌶️", "🫑", "🌽", "🥕", "🫒", "🧄", "🧅", "🥔",
    "🍠", "🥐", "🥯", "🍞", "🥖", "🥨", "🧀", "🥚", "🍳", "🧈",
    "🥞", "🧇", "🥓", "🥩", "🍗", "🍖", "🦴", "🌭", "🍔", "🍟",
];

pub(crate) const ACTIVITIES: &[&str] = &[
    "⚽", "🏀", "🏈", "⚾", "🥎", "🎾", "🏐", "🏉", "🥏", "🎱",
    "🪀", "🏓", "🏸", "🏒", "🏑", "🥍", "🏏", "🪃", "🥅", "⛳",
    "🪁", "🏹", "🎣", "🤿", "🥊", "🥋", "🎽", "🛹", "🛼", "🛷",
    "⛸️", "🥌", "🎿", "⛷️", "🏂", "🪂", "🏋️", "🤼", "🤸", "🤺",
    "⛹️", "🤾", "🏌️", "🏇", "🧘", "🏊", "🤽", "🚣", "🧗", "🚴",
];

pub(crate) const TRAVEL: &[&str] = &[
    "🚗", "🚕", "🚙", "🚌", "🚎", "🏎️", "🚓", "🚑", "🚒", "🚐",
    "🛻", "🚚", "🚛", "🚜", "🦯", "🦽", "🦼", "🛴", "🚲", "🛵",
    "🏍️", "🛺", "🚨", "🚔", "🚍", "🚘", "🚖", "🚡", "🚠", "🚟",
    "🚃", "🚋", "🚞", "🚝", "🚄", "🚅", "🚈", "🚂", "🚆", "🚇",
    "🚊", "🚉", "✈️", "🛫", "🛬", "🛩️", "💺", "🚁", "🛰️", "🚀",
];

pub(crate) const OBJECTS: &[&str] = &[
    "⌚", "📱", "📲", "💻", "⌨️", "🖥️", "🖨️", "🖱️", "🖲️", "🕹️",
    "🗜️", "💾", "💿", "📀", "📼", "📷", "📸", "📹", "🎥", "📽️",
    "🎞️", "📞", "☎️", "📟", "📠", "📺", "📻", "🎙️", "🎚️", "🎛️",
    "🧭", "⏱️", "⏲️", "⏰", "🕰️", "⌛", "⏳", "📡", "🔋", "🔌",
    "💡", "🔦", "🕯️", "🪔", "🧯", "🛢️", "💸", "💵", "💴", "💶",
    "💷",
];

pub(crate) const SYMBOLS: &[&str] = &[
    "❤️", "🧡", "💛", "💚", "💙", "💜", "🖤", "🤍", "🤎", "💔",
    "❣️", "💕", "💞", "💓", "💗", "💖", "💘", "💝", "💟", "☮️",
    "✝️", "☪️", "🕉️", "☸️", "✡️", "🔯", "🕎", "☯️", "☦️", "🛐",
    "⛎", "♈", "♉", "♊", "♋", "♌", "♍", "♎", "♏", "♐",
    "♑", "♒", "♓", "🆔", "⚛️", "🉑", "☢️", "☣️", "📴", "📳",
];
