use super::*;

pub const TEXTS: Texts = Texts {
    common: CommonTexts {
        loading: "加载中...",
        no_data: "未发现数据",
        no_data_desc: "暂时没有内容",
        load_failed: "加载{}失败",
        close: "关闭",
    },
    nav: NavTexts {
        home: "首页",
        projects: "项目",
        photography: "摄影",
        calligraphy: "书法",
        blog: "日志",
        toggle_language: "切换语言",
        toggle_menu: "切换菜单",
        switch_to_light: "切换到亮色模式",
        switch_to_dark: "切换到暗色模式",
    },
    hero: HeroTexts {
        title: "代码、光影，",
        title_highlight: "与翰墨。",
        intro: "你好，我是",
        intro_desc: "一名在摄影与传统书法中寻找平衡的创意开发者。",
        view_projects: "查看项目",
        view_gallery: "浏览画廊",
        card_code: "代码",
        card_code_desc: "前端架构",
        card_photo: "摄影",
        card_ink: "书法",
    },
    projects: ProjectTexts {
        title: "精选作品",
        subtitle: "数字实验与生产级应用。",
        archive_title: "项目归档",
        archive_subtitle: "我的数字实验、开源库和客户工作的完整合集。",
        view_all: "查看所有项目",
        all: "全部",
        demo: "官网",
        source: "源代码",
        features: "核心特性",
        tech: "技术栈",
        back: "返回项目列表",
        not_found: "项目不存在",
        not_found_desc: "该项目可能已被移除或暂不可用。",
    },
    photography: PhotographyTexts {
        title: "视觉故事",
        subtitle: "凝固光影的瞬间。",
        gallery_title: "捕捉瞬间",
        gallery_subtitle: "关于光、影以及它们之间静谧空间的视觉日记。",
        view_gallery: "查看画廊",
        tech_details: "拍摄参数",
        download: "下载原图",
        camera: "相机",
        lens: "镜头",
        aperture: "光圈",
        shutter: "快门",
        iso: "ISO",
        license: "仅限个人使用，转载请注明出处。",
    },
    calligraphy: CalligraphyTexts {
        title: "水墨纸砚",
        subtitle: "现代世界中的传统美学。",
        gallery_title: "水墨纸砚",
        gallery_subtitle: "探索留白、流动与传统美学之间的平衡。",
        view_collection: "查看合集",
        original_text: "原文",
        meaning: "释义与背景",
        download: "下载作品",
        license: "高分辨率数字扫描件。仅限个人使用。",
    },
    blog: BlogTexts {
        title: "日志",
        subtitle: "关于代码、设计与自然的思考。",
        read_all: "阅读所有文章",
        read_full: "阅读全文",
        back: "返回日志",
        close: "关闭文章",
        by: "作者",
    },
    muse: MuseTexts {
        title: "灵感缪斯",
        powered_by: "由 Gemini 驱动",
        greeting: "给我一个词，我还你一段思绪。",
        placeholder: "输入一个主题，例如：雨、根、递归……",
        send: "发送",
        error: "暂时无法连接缪斯，请稍后再试。",
    },
    footer: FooterTexts {
        made_with: "制作于",
        and: "使用",
    },
};
