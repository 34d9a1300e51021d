use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeLevel {
    Warn,
    Error,
}

impl NoticeLevel {
    fn banner_class(&self) -> &'static str {
        match self {
            NoticeLevel::Warn => {
                "bg-yellow-100 border border-yellow-400 text-yellow-700 px-4 py-3 rounded mb-2 flex justify-between items-center"
            }
            NoticeLevel::Error => {
                "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-2 flex justify-between items-center"
            }
        }
    }
}

/// A non-fatal, user-dismissible message. Nothing the client reports through
/// here stops the app; the previous catalog and selection stay usable.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn warn(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warn,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeListProps {
    pub notices: Vec<Notice>,
    pub on_dismiss: Callback<usize>,
}

#[function_component(NoticeList)]
pub fn notice_list(props: &NoticeListProps) -> Html {
    if props.notices.is_empty() {
        return html! {};
    }

    html! {
        <div class="mb-4">
            { for props.notices.iter().enumerate().map(|(index, notice)| {
                let on_dismiss = {
                    let on_dismiss = props.on_dismiss.clone();
                    Callback::from(move |_| on_dismiss.emit(index))
                };
                html! {
                    <div class={notice.level.banner_class()}>
                        <span>{ &notice.text }</span>
                        <button onclick={on_dismiss} class="ml-4 font-bold">{"×"}</button>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_the_level() {
        assert_eq!(Notice::warn("too big").level, NoticeLevel::Warn);
        assert_eq!(Notice::error("network down").level, NoticeLevel::Error);
    }
}
