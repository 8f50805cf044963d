//! Static program catalogue and home-page showcase content.

#[cfg(test)]
#[path = "programs_test.rs"]
mod programs_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Program {
    pub title: &'static str,
    pub short: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

/// Every program, in the order the programs page lists them.
pub const PROGRAMS: &[Program] = &[
    Program {
        title: "Annual General Meeting (AGM)",
        short: "AGM",
        image: "/assets/Hero-alt1.png",
        description: "AGM is a two-day members-only conference held during Thanksgiving break. It rotates across U.S. \
                      colleges, helping AMSA members network and grow. Since the first AGM at MIT/Harvard in 2012, we've \
                      visited NYU, UChicago, Georgia Tech, UC Berkeley, and more, including virtual during COVID-19. \
                      It's a space for learning, bonding, and sharing.",
    },
    Program {
        title: "Change Your Future (CYF)",
        short: "CYF",
        image: "/assets/programs/CYF.png",
        description: "CYF is a one-day annual leadership and college-readiness conference organized for high school \
                      students in Mongolia. The event inspires youth to pursue education abroad, with workshops, panel \
                      discussions, and mentorship. Participants meet students who've received scholarships from U.S. \
                      universities.",
    },
    Program {
        title: "Global Mind Mentorship",
        short: "Global Mind",
        image: "/assets/programs/GlobalMind.png",
        description: "This 8-month mentorship program pairs industry professionals with college students in the U.S., \
                      who in turn guide Mongolian high school students on applying to U.S. schools. With monthly \
                      sessions, career support, and webinars, it builds a learning bridge across generations.",
    },
    Program {
        title: "Best University Opportunity Program (BUOP)",
        short: "BUOP",
        image: "/assets/programs/BUOP.png",
        description: "BUOP empowers college students with personal and professional development workshops. The \
                      sessions cover time management, resume writing, career paths, mental health, and more, run by \
                      professionals and mentors across the AMSA network.",
    },
    Program {
        title: "Temege Campaign",
        short: "Temege",
        image: "/assets/programs/Temege.png",
        description: "A yearly fundraising campaign that helps underprivileged children fulfill their dreams and study \
                      at top universities in the US. Your support lowers the cost of hosting inclusive events open to \
                      the general public.",
    },
    Program {
        title: "Curiosity Corner",
        short: "Curiosity Corner",
        image: "/assets/programs/CuriosityCorner.png",
        description: "This online interview series runs during the college application season. Weekly episodes on \
                      YouTube, Spotify, and Instagram feature Mongolian students studying abroad. They share stories, \
                      challenges, and advice to build inspiration and a sense of community.",
    },
];

/// Highlighted in the programs page heading.
pub const CORE_PROGRAMS: [&str; 3] = ["AGM", "BUOP", "CYF"];

/// Home-page cards: `(short, blurb, card image)`.
pub const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    (
        "CYF",
        "A one-day event inspiring Mongolian high schoolers to explore studying in the U.S. Reached 2300+ students in \
         3 years.",
        "/assets/programs/1.png",
    ),
    (
        "BUOP",
        "A summer program helping over 1600 students prepare for U.S. universities over 10 years, offering \
         scholarships and mentorship.",
        "/assets/programs/2.png",
    ),
    (
        "AGM",
        "Our flagship conference connecting Mongolian students and professionals through workshops, keynotes, and \
         networking events.",
        "/assets/programs/3.png",
    ),
    (
        "Temege",
        "A yearly fundraiser supporting underprivileged students and building long-term scholarship programs for the \
         AMSA community.",
        "/assets/programs/4.png",
    ),
];

#[must_use]
pub fn find_program(short: &str) -> Option<&'static Program> {
    PROGRAMS.iter().find(|p| p.short.eq_ignore_ascii_case(short))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Leader {
    pub name: &'static str,
    pub role: &'static str,
    pub school: &'static str,
    pub graduation: u16,
}

pub const FEATURED_TEAM_YEAR: u16 = 2025;

/// Executive team featured on the home page.
pub const FEATURED_TEAM: &[Leader] = &[
    Leader { name: "Anudari Naran-Ochir", role: "President", school: "Vanderbilt University", graduation: 2025 },
    Leader { name: "Namuun Zolbadrakh", role: "Project Manager", school: "Vanderbilt University", graduation: 2025 },
    Leader { name: "Amarbayasgalan Anar", role: "Marketing Manager", school: "Trinity College", graduation: 2026 },
    Leader {
        name: "Nandintsetseg Batsaikhan",
        role: "Director of Technology",
        school: "Weber State University",
        graduation: 2026,
    },
    Leader { name: "Garid Mendbayar", role: "Director of Finance", school: "Vanderbilt University", graduation: 2025 },
    Leader { name: "Telmen Amarbayasgalan", role: "Project Manager", school: "Whitworth University", graduation: 2026 },
    Leader {
        name: "Anujin Naranbaatar",
        role: "Director of Public Relations",
        school: "Stanford University",
        graduation: 2025,
    },
];

/// Calls to action: `(label, action, href)`.
pub const CALLS_TO_ACTION: &[(&str, &str, &str)] = &[
    ("Become a member", "Register to AMSA!", "/signup/member"),
    ("Wanna contribute?", "Contact us", "#contact"),
    ("Participating?", "Join AGM with us!", "/programs"),
];
