//! Copy and figures shown on the landing page.

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 4] = [
    Stat { number: "5000+", label: "Happy Customers" },
    Stat { number: "$12M+", label: "Paid Out" },
    Stat { number: "10,000+", label: "Licenses Sold" },
    Stat { number: "48hrs", label: "Average Payout Time" },
];

pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        title: "Upload License",
        description: "Simply upload your software license details. We support all major software vendors and license types.",
        icon: "fas fa-right-left",
        color: "accent-blue",
    },
    Step {
        title: "Get Valuation",
        description: "Our AI-powered system analyzes market data to provide you with the best possible valuation for your license.",
        icon: "fas fa-chart-column",
        color: "accent-violet",
    },
    Step {
        title: "Get Paid",
        description: "Accept our offer and receive payment within 48 hours via your preferred payment method.",
        icon: "fas fa-circle-dollar-to-slot",
        color: "accent-green",
    },
];

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Instant Valuations",
        description: "Our AI-powered system provides instant valuations based on current market conditions and historical data.",
        icon: "fas fa-bolt",
        color: "accent-amber",
    },
    Feature {
        title: "Secure Transactions",
        description: "We use bank-level encryption to ensure your license information and financial details are always protected.",
        icon: "fas fa-lock",
        color: "accent-blue",
    },
    Feature {
        title: "Fast Payments",
        description: "Receive payment within 48 hours of accepting our offer, with multiple payout options available.",
        icon: "fas fa-clock",
        color: "accent-green",
    },
    Feature {
        title: "Expert Support",
        description: "Our team of software licensing experts is available to help you through every step of the process.",
        icon: "fas fa-award",
        color: "accent-purple",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub avatar: &'static str,
}

impl Testimonial {
    /// Avatar fallback, e.g. "SJ" for Sarah Johnson.
    pub fn initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "SoftSell helped us recover over $50,000 from unused enterprise software licenses. The process was seamless and the valuation was fair.",
        author: "Sarah Johnson",
        role: "CTO",
        company: "Quantum Innovations",
        avatar: "https://randomuser.me/api/portraits/women/32.jpg",
    },
    Testimonial {
        quote: "When our company downsized, we had dozens of unused licenses. SoftSell provided a quick and hassle-free way to recoup some of our investment.",
        author: "Michael Chen",
        role: "IT Director",
        company: "Nexus Dynamics",
        avatar: "https://randomuser.me/api/portraits/men/54.jpg",
    },
    Testimonial {
        quote: "I was skeptical at first, but SoftSell's valuation was better than I expected. The payment was processed quickly and their customer support was excellent.",
        author: "Emily Rodriguez",
        role: "Finance Manager",
        company: "Horizon Solutions",
        avatar: "https://randomuser.me/api/portraits/women/68.jpg",
    },
];

/// Section ids the navbar links to, in page order.
pub const NAV_SECTIONS: [&str; 4] = ["how-it-works", "why-choose-us", "testimonials", "contact"];

/// "why-choose-us" -> "Why Choose Us"
pub fn section_label(id: &str) -> String {
    id.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const FOOTER_LINK_GROUPS: [(&str, [FooterLink; 4]); 2] = [
    (
        "Quick Links",
        [
            FooterLink { name: "How It Works", href: "#how-it-works" },
            FooterLink { name: "Why Choose Us", href: "#why-choose-us" },
            FooterLink { name: "Testimonials", href: "#testimonials" },
            FooterLink { name: "Contact", href: "#contact" },
        ],
    ),
    (
        "Legal",
        [
            FooterLink { name: "Terms of Service", href: "#" },
            FooterLink { name: "Privacy Policy", href: "#" },
            FooterLink { name: "Cookie Policy", href: "#" },
            FooterLink { name: "GDPR Compliance", href: "#" },
        ],
    ),
];
