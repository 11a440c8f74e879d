/// Standard English stop words.
pub const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "am", "an", "and", "any",
    "are", "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "couldn", "d", "did", "didn", "do", "does", "doesn", "doing",
    "don", "down", "during", "each", "few", "for", "from", "further", "had", "hadn", "has",
    "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "ll", "m",
    "ma", "me", "mightn", "more", "most", "mustn", "my", "myself", "needn", "no", "nor", "not",
    "now", "o", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "re", "s", "same", "shan", "she", "should", "shouldn", "so", "some",
    "such", "t", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "ve",
    "very", "was", "wasn", "we", "were", "weren", "what", "when", "where", "which", "while",
    "who", "whom", "why", "will", "with", "won", "wouldn", "y", "you", "your", "yours",
    "yourself", "yourselves",
];

/// Navigation chrome, web boilerplate, and generic business vocabulary.
pub const SEO: &[&str] = &[
    // navigation
    "home", "about", "contact", "blog", "news", "search", "menu", "login", "register",
    "subscribe", "follow", "share", "like", "comment", "reply", "click", "here", "read", "more",
    "continue", "next", "previous", "back", "forward",
    // web
    "page", "site", "website", "link", "url", "http", "https", "www", "com", "org", "net",
    "email", "mail", "phone", "address", "location", "map",
    // business
    "company", "business", "service", "services", "product", "products", "solution",
    "solutions", "team", "staff", "member", "members", "customer", "customers", "client",
    "clients", "user", "users",
    // time
    "today", "yesterday", "tomorrow", "week", "month", "year", "time", "date", "schedule",
    "appointment", "calendar",
    // adjectives
    "good", "bad", "great", "best", "better", "worse", "worst", "nice", "beautiful", "ugly",
    "big", "small", "large", "huge", "tiny", "new", "old", "fresh",
    // verbs
    "do", "does", "did", "done", "doing", "make", "makes", "made", "making", "get", "gets",
    "got", "getting", "give", "gives", "gave", "giving", "take", "takes", "took", "taking",
    "put", "puts", "putting",
];

/// Words that are not stop words but never make useful single keywords.
pub const IRRELEVANT: &[&str] = &[
    "said", "says", "tell", "told", "ask", "asked", "think", "thought", "know", "knew", "see",
    "saw", "look", "looked", "come", "came", "go", "went", "get", "got", "make", "made", "take",
    "took", "give", "gave", "find", "found", "work", "worked", "call", "called", "try", "tried",
    "use", "used", "want", "wanted", "need", "needed", "help", "helped", "start", "started",
    "stop", "stopped", "today", "yesterday", "tomorrow", "monday", "tuesday", "wednesday",
    "thursday", "friday", "saturday", "sunday", "january", "february", "march", "april", "may",
    "june", "july", "august", "september", "october", "november", "december",
];

/// A phrase may not start or end with one of these.
pub const CONNECTORS: &[&str] = &[
    "and", "or", "but", "the", "a", "an", "in", "on", "at", "to", "for", "of", "with",
];
