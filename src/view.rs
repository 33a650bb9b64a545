use crate::app::{Message, TempWidget};
use iced::{
    theme,
    widget::{button, column, container, row, text, text_input},
    Alignment, Color, Element, Length,
};

pub fn view(app: &TempWidget) -> Element<Message> {
    let input = text_input("83013 or KJAC", &app.input)
        .on_input(Message::InputChanged)
        .on_submit(Message::Update)
        .padding(8)
        .size(14)
        .width(Length::Fixed(110.0));

    let update_button = button(text("Update").size(14))
        .on_press(Message::Update)
        .padding([8, 16])
        .style(theme::Button::Primary);

    let input_row = row![text("Zipcode or Station:").size(14), input, update_button]
        .spacing(8)
        .align_items(Alignment::Center);

    let help = text("Examples: 83013, KJAC, D0414")
        .size(11)
        .style(Color::from_rgb(0.5, 0.5, 0.5));

    let location: Element<Message> = match &app.observation {
        Some(obs) => text(&obs.location).size(16).into(),
        None => text("Enter zipcode or station").size(16).into(),
    };

    let temperature: Element<Message> = match &app.observation {
        Some(obs) => text(format!("{}°C / {}°F", obs.celsius, obs.fahrenheit))
            .size(28)
            .into(),
        None => text("").size(28).into(),
    };

    let status: Element<Message> = if app.loading {
        text("Updating...")
            .size(11)
            .style(Color::from_rgb(0.5, 0.5, 0.5))
            .into()
    } else if let Some(error) = &app.error {
        text(error)
            .size(11)
            .style(Color::from_rgb(0.8, 0.3, 0.3))
            .into()
    } else if let Some(updated) = &app.last_updated {
        text(format!("Updated: {}", updated.format("%I:%M %p")))
            .size(11)
            .style(Color::from_rgb(0.5, 0.5, 0.5))
            .into()
    } else {
        text("").size(11).into()
    };

    let content = column![input_row, help, location, temperature, status]
        .spacing(8)
        .padding(12)
        .align_items(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .into()
}
