use super::*;

pub const TEXTS: Texts = Texts {
    common: CommonTexts {
        loading: "Loading...",
        no_data: "No Data Found",
        no_data_desc: "There is no content available at the moment",
        load_failed: "Failed to load {}",
        close: "Close",
    },
    nav: NavTexts {
        home: "Home",
        projects: "Projects",
        photography: "Photography",
        calligraphy: "Calligraphy",
        blog: "Blog",
        toggle_language: "Toggle Language",
        toggle_menu: "Toggle Menu",
        switch_to_light: "Switch to light mode",
        switch_to_dark: "Switch to dark mode",
    },
    hero: HeroTexts {
        title: "Code, Lens,",
        title_highlight: "& Ink.",
        intro: "Hi, I'm",
        intro_desc: "A creative developer who finds balance through photography and traditional \
                     calligraphy.",
        view_projects: "View Projects",
        view_gallery: "View Gallery",
        card_code: "Code",
        card_code_desc: "Frontend Architecture",
        card_photo: "Photo",
        card_ink: "Ink",
    },
    projects: ProjectTexts {
        title: "Selected Works",
        subtitle: "Digital experiments and production applications.",
        archive_title: "Project Archive",
        archive_subtitle: "A complete collection of my digital experiments, open-source \
                           libraries, and client work.",
        view_all: "View All Projects",
        all: "All",
        demo: "Website",
        source: "Source Code",
        features: "Key Features",
        tech: "Technologies",
        back: "Back to Projects",
        not_found: "Project Not Found",
        not_found_desc: "This project may have been removed or is unavailable.",
    },
    photography: PhotographyTexts {
        title: "Visual Stories",
        subtitle: "Frozen moments of light and shadow.",
        gallery_title: "Captured Moments",
        gallery_subtitle: "A visual diary of light, shadows, and the quiet spaces in between.",
        view_gallery: "View Gallery",
        tech_details: "Technical Details",
        download: "Download Original",
        camera: "Camera",
        lens: "Lens",
        aperture: "Aperture",
        shutter: "Shutter",
        iso: "ISO",
        license: "Free for personal use. Attribution appreciated.",
    },
    calligraphy: CalligraphyTexts {
        title: "Ink & Paper",
        subtitle: "Traditional aesthetics in a modern world.",
        gallery_title: "Ink & Paper",
        gallery_subtitle: "Exploring the balance between negative space, flow, and traditional \
                           aesthetics.",
        view_collection: "View Collection",
        original_text: "Original Text",
        meaning: "Meaning & Context",
        download: "Download Artwork",
        license: "High-resolution digital scan. Personal use only.",
    },
    blog: BlogTexts {
        title: "The Journal",
        subtitle: "Reflections on code, design, and nature.",
        read_all: "Read All Articles",
        read_full: "Read Full Story",
        back: "Back to Journal",
        close: "Close Article",
        by: "By",
    },
    muse: MuseTexts {
        title: "Creative Muse",
        powered_by: "Powered by Gemini",
        greeting: "Give me a word, and I will give you a thought.",
        placeholder: "Type a topic, e.g. rain, roots, recursion...",
        send: "Send",
        error: "The muse could not be reached. Please try again later.",
    },
    footer: FooterTexts {
        made_with: "Made with",
        and: "and",
    },
};
