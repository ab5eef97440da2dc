//! Built-in integration table
//!
//! `setup_ref` names a service in the setup catalog; readiness is derived
//! from that service's required keys, so there is no per-integration key
//! list here.

use super::Group::*;
use super::Integration;

pub(super) fn all() -> Vec<Integration> {
    let mut all = Vec::new();
    all.extend(news());
    all.extend(knowledge());
    all.extend(utility());
    all.extend(dev());
    all.extend(social());
    all.extend(comms());
    all.extend(productivity());
    all.extend(system());
    all.extend(security());
    all.extend(marketing());
    all.extend(finance());
    all.extend(media());
    all
}

fn news() -> Vec<Integration> {
    vec![
        Integration::open(
            "hackernews",
            "Hacker News",
            News,
            "Top, new and best stories with comment trees",
            &["conduit hackernews top --limit 10", "conduit hackernews item 8863"],
        ),
        Integration::open(
            "lobsters",
            "Lobsters",
            News,
            "Hottest and newest Lobsters stories",
            &["conduit lobsters hottest --limit 10"],
        ),
        Integration::open(
            "devto",
            "DEV Community",
            News,
            "Articles from dev.to by tag",
            &["conduit devto articles --tag rust"],
        ),
        Integration::open(
            "rss",
            "RSS / Atom",
            News,
            "Fetch and summarize any RSS or Atom feed",
            &["conduit rss read https://blog.rust-lang.org/feed.xml"],
        ),
        Integration::open(
            "googlenews",
            "Google News",
            News,
            "Headlines from the public Google News feed",
            &["conduit googlenews search \"open source\""],
        ),
        Integration::authed(
            "newsapi",
            "NewsAPI",
            News,
            "Headlines and article search across 80k sources",
            "newsapi",
            &["conduit news headlines --country us", "conduit news search rust"],
        ),
    ]
}

fn knowledge() -> Vec<Integration> {
    vec![
        Integration::open(
            "wikipedia",
            "Wikipedia",
            Knowledge,
            "Article summaries and search",
            &["conduit wikipedia summary \"Rust (programming language)\""],
        ),
        Integration::open(
            "arxiv",
            "arXiv",
            Knowledge,
            "Search preprints by query or category",
            &["conduit arxiv search \"retrieval augmented generation\" --limit 5"],
        ),
        Integration::open(
            "dictionary",
            "Dictionary",
            Knowledge,
            "Definitions, phonetics and synonyms",
            &["conduit dictionary define ephemeral"],
        ),
        Integration::open(
            "openlibrary",
            "Open Library",
            Knowledge,
            "Book search and metadata",
            &["conduit openlibrary search \"dune\""],
        ),
        Integration::open(
            "stackoverflow",
            "Stack Overflow",
            Knowledge,
            "Question search with accepted answers",
            &["conduit stackoverflow search \"borrow checker\" --tag rust"],
        ),
        Integration::open(
            "crates",
            "crates.io",
            Knowledge,
            "Rust crate search and metadata",
            &["conduit crates search serde", "conduit crates info tokio"],
        ),
        Integration::open(
            "npm",
            "npm",
            Knowledge,
            "JavaScript package search and metadata",
            &["conduit npm info react"],
        ),
        Integration::open(
            "pypi",
            "PyPI",
            Knowledge,
            "Python package metadata",
            &["conduit pypi info requests"],
        ),
        Integration::authed(
            "wolfram",
            "Wolfram Alpha",
            Knowledge,
            "Computational answers to natural-language questions",
            "wolfram",
            &["conduit wolfram ask \"distance to the moon\""],
        ),
    ]
}

fn utility() -> Vec<Integration> {
    vec![
        Integration::open(
            "weather",
            "Weather",
            Utility,
            "Current conditions and forecast via Open-Meteo",
            &["conduit weather now Berlin", "conduit weather forecast Tokyo --days 3"],
        ),
        Integration::authed(
            "openweather",
            "OpenWeather",
            Utility,
            "Weather with alerts and air quality",
            "openweather",
            &["conduit openweather now London", "conduit openweather air London"],
        ),
        Integration::open(
            "timezone",
            "Time Zones",
            Utility,
            "Current time and conversion between zones",
            &["conduit timezone now America/New_York"],
        ),
        Integration::open(
            "currency",
            "Currency",
            Utility,
            "Exchange rates and conversion",
            &["conduit currency convert 100 USD EUR"],
        ),
        Integration::open(
            "ipinfo",
            "IP Info",
            Utility,
            "Geolocation and ASN for an IP address",
            &["conduit ipinfo lookup 1.1.1.1"],
        ),
        Integration::open(
            "geocode",
            "Geocoding",
            Utility,
            "Address to coordinates via Nominatim",
            &["conduit geocode search \"Eiffel Tower\""],
        ),
        Integration::open(
            "qrcode",
            "QR Code",
            Utility,
            "Render text or URLs as a QR code image",
            &["conduit qrcode make https://example.com --out qr.png"],
        ),
        Integration::authed(
            "translate",
            "Translate",
            Utility,
            "Text translation through DeepL",
            "deepl",
            &["conduit translate --to de \"good morning\""],
        ),
    ]
}

fn dev() -> Vec<Integration> {
    vec![
        Integration::authed(
            "github",
            "GitHub",
            Dev,
            "Repositories, issues, pull requests and notifications",
            "github",
            &[
                "conduit github repos --limit 10",
                "conduit github issues owner/repo --state open",
                "conduit github prs owner/repo",
            ],
        ),
        Integration::authed(
            "gist",
            "GitHub Gists",
            Dev,
            "Create and list gists",
            "github",
            &["conduit gist create notes.md", "conduit gist list"],
        ),
        Integration::authed(
            "gitlab",
            "GitLab",
            Dev,
            "Projects, issues and merge requests",
            "gitlab",
            &["conduit gitlab projects", "conduit gitlab mrs group/project"],
        ),
        Integration::authed(
            "jira",
            "Jira",
            Dev,
            "Issue search, creation and transitions",
            "jira",
            &[
                "conduit jira issues --jql \"assignee = currentUser()\"",
                "conduit jira create PROJ \"Fix login\"",
            ],
        ),
        Integration::authed(
            "linear",
            "Linear",
            Dev,
            "Issues and cycles",
            "linear",
            &["conduit linear issues --assignee me"],
        ),
        Integration::authed(
            "sentry",
            "Sentry",
            Dev,
            "Unresolved issues and event details",
            "sentry",
            &["conduit sentry issues --project web"],
        ),
        Integration::authed(
            "vercel",
            "Vercel",
            Dev,
            "Deployments and their status",
            "vercel",
            &["conduit vercel deployments --limit 5"],
        ),
        Integration::authed(
            "netlify",
            "Netlify",
            Dev,
            "Sites and deploys",
            "netlify",
            &["conduit netlify sites"],
        ),
        Integration::open(
            "dockerhub",
            "Docker Hub",
            Dev,
            "Public image search and tags",
            &["conduit dockerhub tags library/postgres"],
        ),
    ]
}

fn social() -> Vec<Integration> {
    vec![
        Integration::authed(
            "twitter",
            "X / Twitter",
            Social,
            "Recent search and user timelines",
            "twitter",
            &[
                "conduit twitter search \"rustlang\" --limit 20",
                "conduit twitter user rustlang",
            ],
        ),
        Integration::authed(
            "reddit",
            "Reddit",
            Social,
            "Subreddit listings and search",
            "reddit",
            &[
                "conduit reddit top rust --time week",
                "conduit reddit search \"async rust\"",
            ],
        ),
        Integration::authed(
            "mastodon",
            "Mastodon",
            Social,
            "Home timeline, search and posting",
            "mastodon",
            &["conduit mastodon timeline", "conduit mastodon post \"hello fediverse\""],
        ),
        Integration::authed(
            "bluesky",
            "Bluesky",
            Social,
            "Timeline, search and posting over AT Protocol",
            "bluesky",
            &["conduit bluesky timeline", "conduit bluesky post \"hello\""],
        ),
        Integration::authed(
            "youtube",
            "YouTube",
            Social,
            "Video search and channel stats",
            "youtube",
            &[
                "conduit youtube search \"rust tutorial\"",
                "conduit youtube channel @rustvideos",
            ],
        ),
        Integration::authed(
            "producthunt",
            "Product Hunt",
            Social,
            "Today's launches and votes",
            "producthunt",
            &["conduit producthunt today"],
        ),
    ]
}

fn comms() -> Vec<Integration> {
    vec![
        Integration::authed(
            "slack",
            "Slack",
            Comms,
            "Channels, history, search and posting",
            "slack",
            &["conduit slack channels", "conduit slack send #general \"deploy done\""],
        ),
        Integration::authed(
            "discord",
            "Discord",
            Comms,
            "Guild channels and bot messages",
            "discord",
            &["conduit discord guilds", "conduit discord send <channel-id> \"hi\""],
        ),
        Integration::authed(
            "telegram",
            "Telegram",
            Comms,
            "Send messages through a bot",
            "telegram",
            &["conduit telegram send \"build finished\""],
        ),
        Integration::authed(
            "email",
            "Email",
            Comms,
            "Read the inbox over IMAP and send over SMTP",
            "email",
            &[
                "conduit email inbox --unread",
                "conduit email send to@example.com \"subject\" \"body\"",
            ],
        ),
        Integration::authed(
            "sms",
            "SMS",
            Comms,
            "Send text messages through Twilio",
            "twilio",
            &["conduit sms send +15551234567 \"on my way\""],
        ),
        Integration::authed(
            "matrix",
            "Matrix",
            Comms,
            "Rooms and messages on any homeserver",
            "matrix",
            &["conduit matrix rooms", "conduit matrix send !room:matrix.org \"hi\""],
        ),
        Integration::authed(
            "teams",
            "Microsoft Teams",
            Comms,
            "Post to a channel through an incoming webhook",
            "teams",
            &["conduit teams send \"release 1.2 is out\""],
        ),
        Integration::open(
            "imessage",
            "iMessage",
            Comms,
            "Send iMessages from the local Messages app (macOS)",
            &["conduit imessage send +15551234567 \"hello\""],
        )
        .via("osascript"),
    ]
}

fn productivity() -> Vec<Integration> {
    vec![
        Integration::authed(
            "notion",
            "Notion",
            Productivity,
            "Page and database search, page creation",
            "notion",
            &[
                "conduit notion search \"meeting notes\"",
                "conduit notion page <page-id>",
            ],
        ),
        Integration::authed(
            "todoist",
            "Todoist",
            Productivity,
            "Tasks and projects",
            "todoist",
            &[
                "conduit todoist tasks --filter today",
                "conduit todoist add \"buy milk\"",
            ],
        ),
        Integration::authed(
            "trello",
            "Trello",
            Productivity,
            "Boards, lists and cards",
            "trello",
            &["conduit trello boards", "conduit trello cards <board-id>"],
        ),
        Integration::authed(
            "airtable",
            "Airtable",
            Productivity,
            "Bases and record queries",
            "airtable",
            &["conduit airtable records <base-id> Tasks"],
        ),
        Integration::authed(
            "asana",
            "Asana",
            Productivity,
            "My tasks and project tasks",
            "asana",
            &["conduit asana tasks --mine"],
        ),
        Integration::authed(
            "clickup",
            "ClickUp",
            Productivity,
            "Tasks across spaces",
            "clickup",
            &["conduit clickup tasks --list <list-id>"],
        ),
        Integration::authed(
            "obsidian",
            "Obsidian",
            Productivity,
            "Search and append to notes in a local vault",
            "obsidian",
            &[
                "conduit obsidian search todo",
                "conduit obsidian append Daily.md \"- shipped\"",
            ],
        ),
        Integration::open(
            "calendar",
            "Calendar",
            Productivity,
            "Today's events from the local Calendar app (macOS)",
            &["conduit calendar today", "conduit calendar add \"Standup\" 09:30"],
        )
        .via("osascript"),
        Integration::open(
            "reminders",
            "Reminders",
            Productivity,
            "Lists and reminders from the local Reminders app (macOS)",
            &["conduit reminders list", "conduit reminders add \"call mom\""],
        )
        .via("osascript"),
        Integration::open(
            "notes",
            "Apple Notes",
            Productivity,
            "Search and create notes in the local Notes app (macOS)",
            &["conduit notes search recipe"],
        )
        .via("osascript"),
    ]
}

fn system() -> Vec<Integration> {
    vec![
        Integration::open(
            "kubernetes",
            "Kubernetes",
            System,
            "Pods, deployments and logs through the current kubectl context",
            &["conduit kubernetes pods -n default", "conduit kubernetes logs <pod>"],
        )
        .via("kubectl"),
        Integration::authed(
            "aws",
            "AWS",
            System,
            "Read-only EC2, S3 and Lambda listings through the aws CLI",
            "aws",
            &["conduit aws ec2 list", "conduit aws s3 ls"],
        )
        .via("aws"),
        Integration::open(
            "docker",
            "Docker",
            System,
            "Local containers and images",
            &["conduit docker ps", "conduit docker images"],
        )
        .via("docker"),
        Integration::open(
            "macos",
            "macOS",
            System,
            "Volume, notifications, frontmost app and clipboard",
            &["conduit macos notify \"done\"", "conduit macos clipboard"],
        )
        .via("osascript"),
        Integration::open(
            "music",
            "Music",
            System,
            "Control playback in the local Music app (macOS)",
            &["conduit music now-playing", "conduit music pause"],
        )
        .via("osascript"),
    ]
}

fn security() -> Vec<Integration> {
    vec![
        Integration::authed(
            "virustotal",
            "VirusTotal",
            Security,
            "URL, domain and file hash reputation",
            "virustotal",
            &[
                "conduit virustotal url https://example.com",
                "conduit virustotal hash <sha256>",
            ],
        ),
        Integration::authed(
            "shodan",
            "Shodan",
            Security,
            "Exposed services for a host",
            "shodan",
            &["conduit shodan host 8.8.8.8"],
        ),
        Integration::authed(
            "hibp",
            "Have I Been Pwned",
            Security,
            "Breaches affecting an account or domain",
            "hibp",
            &["conduit hibp account you@example.com"],
        ),
        Integration::open(
            "cve",
            "CVE",
            Security,
            "Vulnerability lookup in the NVD",
            &["conduit cve get CVE-2021-44228", "conduit cve search openssl"],
        ),
        Integration::open(
            "ssl",
            "TLS Certificates",
            Security,
            "Certificate chain and expiry for a host",
            &["conduit ssl check example.com"],
        ),
    ]
}

fn marketing() -> Vec<Integration> {
    vec![
        Integration::authed(
            "mailchimp",
            "Mailchimp",
            Marketing,
            "Audiences and campaign reports",
            "mailchimp",
            &["conduit mailchimp lists", "conduit mailchimp campaigns --limit 5"],
        ),
        Integration::authed(
            "hubspot",
            "HubSpot",
            Marketing,
            "Contacts, companies and deals",
            "hubspot",
            &["conduit hubspot contacts --limit 10"],
        ),
        Integration::authed(
            "sendgrid",
            "SendGrid",
            Marketing,
            "Transactional email and delivery stats",
            "sendgrid",
            &["conduit sendgrid send to@example.com \"subject\" \"body\""],
        ),
        Integration::authed(
            "buffer",
            "Buffer",
            Marketing,
            "Queue posts across social profiles",
            "buffer",
            &["conduit buffer queue \"new blog post\""],
        ),
    ]
}

fn finance() -> Vec<Integration> {
    vec![
        Integration::open(
            "crypto",
            "Crypto Prices",
            Finance,
            "Spot prices and market data via CoinGecko",
            &["conduit crypto price bitcoin", "conduit crypto top --limit 10"],
        ),
        Integration::authed(
            "stocks",
            "Stocks",
            Finance,
            "Quotes and daily series via Alpha Vantage",
            "alphavantage",
            &["conduit stocks quote AAPL"],
        ),
        Integration::authed(
            "stripe",
            "Stripe",
            Finance,
            "Balance, charges and customers",
            "stripe",
            &["conduit stripe balance", "conduit stripe charges --limit 5"],
        ),
    ]
}

fn media() -> Vec<Integration> {
    vec![
        Integration::authed(
            "unsplash",
            "Unsplash",
            Media,
            "Free photo search",
            "unsplash",
            &["conduit unsplash search mountains"],
        ),
        Integration::authed(
            "tmdb",
            "TMDB",
            Media,
            "Movie and TV metadata",
            "tmdb",
            &["conduit tmdb search \"dune\"", "conduit tmdb trending"],
        ),
        Integration::authed(
            "giphy",
            "GIPHY",
            Media,
            "GIF search",
            "giphy",
            &["conduit giphy search \"thumbs up\""],
        ),
        Integration::authed(
            "lastfm",
            "Last.fm",
            Media,
            "Artist info and listening charts",
            "lastfm",
            &["conduit lastfm artist \"Radiohead\""],
        ),
        Integration::open(
            "podcasts",
            "Podcasts",
            Media,
            "Podcast search via the iTunes directory",
            &["conduit podcasts search \"rustacean station\""],
        ),
        Integration::open(
            "xkcd",
            "xkcd",
            Media,
            "Latest or specific xkcd comics",
            &["conduit xkcd latest", "conduit xkcd get 927"],
        ),
    ]
}
