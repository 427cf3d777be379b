use crate::components::icon::Icon;

#[derive(Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, PartialEq)]
pub struct ApproachStep {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, PartialEq)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub profile_url: &'static str,
    /// Empty means the fallback team photo is shown.
    pub image_url: &'static str,
}

pub static SERVICES: &[Service] = &[
    Service {
        title: "Readiness Assessment",
        description: "Assess your organization's readiness for AI adoption and identify key opportunities.",
        icon: Icon::ChartLine,
    },
    Service {
        title: "AI Strategy Development",
        description: "Develop a tailored AI strategy aligned with your business objectives.",
        icon: Icon::ChessKnight,
    },
    Service {
        title: "Custom AI Solutions",
        description: "Create customized AI solutions that solve your specific business challenges.",
        icon: Icon::Cogs,
    },
    Service {
        title: "Training and Education",
        description: "Provide training and educational resources to empower your team with AI knowledge.",
        icon: Icon::GraduationCap,
    },
];

pub static APPROACH_STEPS: &[ApproachStep] = &[
    ApproachStep {
        name: "Initial Consulting and Needs Assessment",
        description: "Understand your business challenges and define AI goals.",
        icon: Icon::Lightbulb,
    },
    ApproachStep {
        name: "Customized Strategy Development",
        description: "Design a tailored AI strategy based on your unique requirements.",
        icon: Icon::ChessKnight,
    },
    ApproachStep {
        name: "AI Solution Design and Development",
        description: "Create bespoke AI solutions using the latest technologies.",
        icon: Icon::Cogs,
    },
    ApproachStep {
        name: "Implementation and Integration",
        description: "Seamlessly integrate AI solutions into your existing infrastructure.",
        icon: Icon::PuzzlePiece,
    },
    ApproachStep {
        name: "Training and Workshops",
        description: "Provide hands-on training to ensure successful adoption.",
        icon: Icon::GraduationCap,
    },
    ApproachStep {
        name: "Ongoing Support and Optimization",
        description: "Continuous monitoring and refinement for optimal performance.",
        icon: Icon::Rocket,
    },
    ApproachStep {
        name: "Scalability and Future Enhancements",
        description: "Plan for future growth and expansion with scalable AI solutions.",
        icon: Icon::ChartLine,
    },
];

pub static BENEFITS: &[Benefit] = &[
    Benefit {
        title: "Faster Decisions",
        description: "Turn scattered data into timely insight your leadership can act on.",
        icon: Icon::Bolt,
    },
    Benefit {
        title: "Lower Operating Costs",
        description: "Automate repetitive work so your people focus on what matters.",
        icon: Icon::Coins,
    },
    Benefit {
        title: "Reduced Risk",
        description: "Adopt AI responsibly with governance built in from day one.",
        icon: Icon::Shield,
    },
    Benefit {
        title: "Lasting Advantage",
        description: "Build in-house capability that keeps paying off after we leave.",
        icon: Icon::Rocket,
    },
];

pub static TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Yariv",
        title: "AI",
        description: "Leads model design and delivery across our client engagements.",
        profile_url: "https://www.linkedin.com/in/yariv",
        image_url: "/team/yariv.jpg",
    },
    TeamMember {
        name: "Sara",
        title: "Strategy",
        description: "Aligns AI roadmaps with business goals and measurable outcomes.",
        profile_url: "https://www.linkedin.com/in/sara",
        image_url: "/team/sara.jpg",
    },
    TeamMember {
        name: "Ben",
        title: "Consulting",
        description: "",
        profile_url: "https://www.linkedin.com/in/ben",
        image_url: "/team/ben.jpg",
    },
    TeamMember {
        name: "Marco",
        title: "AI",
        description: "Turns raw data into models that hold up in production.",
        profile_url: "https://www.linkedin.com/in/marco",
        image_url: "/team/marco.jpg",
    },
    TeamMember {
        name: "Andra",
        title: "Consulting",
        description: "Guides teams through adoption, training and change.",
        profile_url: "https://www.linkedin.com/in/andra",
        image_url: "",
    },
];
