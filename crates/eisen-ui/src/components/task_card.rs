use eisen_core::task::Task;
use uuid::Uuid;
use web_sys::{
  DragEvent,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
  pub task:          Task,
  pub is_dragging:   bool,
  pub on_drag_start: Callback<Uuid>,
  pub on_drag_end:   Callback<()>,
  pub on_start_edit: Callback<Uuid>,
  pub on_delete:     Callback<Uuid>
}

#[function_component(TaskCard)]
pub fn task_card(
  props: &TaskCardProps
) -> Html {
  let task_id = props.task.uuid;

  let ondragstart = {
    let on_drag_start =
      props.on_drag_start.clone();
    Callback::from(
      move |event: DragEvent| {
        if let Some(data_transfer) =
          event.data_transfer()
        {
          let _ = data_transfer
            .set_data(
              "text/plain",
              &task_id.to_string()
            );
          data_transfer
            .set_drop_effect("move");
        }
        on_drag_start.emit(task_id);
      }
    )
  };

  let ondragend = {
    let on_drag_end =
      props.on_drag_end.clone();
    Callback::from(move |_| {
      on_drag_end.emit(());
    })
  };

  let edit_from_title = {
    let on_start_edit =
      props.on_start_edit.clone();
    Callback::from(move |_| {
      on_start_edit.emit(task_id)
    })
  };

  let edit_from_due = {
    let on_start_edit =
      props.on_start_edit.clone();
    Callback::from(move |_| {
      on_start_edit.emit(task_id)
    })
  };

  let ondelete = {
    let on_delete =
      props.on_delete.clone();
    Callback::from(
      move |event: MouseEvent| {
        event.stop_propagation();
        on_delete.emit(task_id);
      }
    )
  };

  html! {
      <div class={classes!("task-card", props.is_dragging.then_some("dragging"))} draggable="true" {ondragstart} {ondragend}>
          <div class="task-card-title" onclick={edit_from_title}>{ &props.task.title }</div>
          <div class="task-card-due" onclick={edit_from_due}>{ format!("due {}", props.task.due) }</div>
          <button class="card-delete" title="Delete task" onclick={ondelete}>{ "x" }</button>
      </div>
  }
}
